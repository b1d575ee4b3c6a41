//! Field Input Component
//!
//! Renders one form field according to its kind.

use console_core::{FieldKind, FieldSpec};
use leptos::prelude::*;

#[component]
pub fn FieldInput(
    spec: FieldSpec,
    #[prop(into)] input_id: String,
    value: RwSignal<String>,
) -> impl IntoView {
    let control = match spec.kind {
        FieldKind::Id | FieldKind::Text => view! {
            <input
                type="text"
                class="form-control"
                id=input_id.clone()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
        FieldKind::Flag => view! {
            <select
                class="form-control"
                id=input_id.clone()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">""</option>
                <option value="true">"True"</option>
                <option value="false">"False"</option>
            </select>
        }
        .into_any(),
        FieldKind::Sort(options) => view! {
            <select
                class="form-control"
                id=input_id.clone()
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">""</option>
                {options.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
            </select>
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=input_id>{spec.label}{if spec.required { " *" } else { "" }}</label>
            {control}
        </div>
    }
}
