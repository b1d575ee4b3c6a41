//! Review Form Component
//!
//! Product-only panel that attaches a review to the product in the main form.

use std::rc::Rc;

use console_core::{FieldSpec, FormValues, Product, REVIEW_FIELDS};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::app::Console;
use crate::components::FieldInput;

#[component]
pub fn ReviewForm(console: StoredValue<Rc<Console<Product>>, LocalStorage>) -> impl IntoView {
    let fields: Vec<(FieldSpec, RwSignal<String>)> = REVIEW_FIELDS
        .iter()
        .map(|field| (*field, RwSignal::new(String::new())))
        .collect();
    let signals = StoredValue::new(fields.clone());

    let submit = move |_: ev::MouseEvent| {
        let Some(console) = console.try_get_value() else {
            log::warn!(target: "review", "console already disposed");
            return;
        };
        let form = signals.with_value(|fields| {
            fields
                .iter()
                .fold(FormValues::new(), |form, (spec, value)| form.with(spec.name, value.get_untracked()))
        });
        spawn_local(async move { console.add_review(&form).await });
    };

    let inputs = fields
        .into_iter()
        .map(|(spec, value)| {
            view! { <FieldInput spec=spec input_id=format!("review_{}", spec.name) value=value /> }
        })
        .collect_view();

    view! {
        <div class="review-form">
            <h2>"Add Review"</h2>
            {inputs}
            <button type="button" id="review-btn" class="btn btn-primary" on:click=submit>
                "Add Review"
            </button>
        </div>
    }
}
