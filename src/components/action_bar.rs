//! Action Bar Component
//!
//! One button per console action, wired to the binding's click handlers.

use console_core::Action;
use leptos::prelude::*;

use crate::binding::SignalBinding;

#[component]
pub fn ActionBar(binding: SignalBinding) -> impl IntoView {
    view! {
        <div class="action-bar">
            {Action::ALL.iter().map(|action| {
                let action = *action;
                let class = match action {
                    Action::Delete => "btn btn-danger",
                    Action::Clear => "btn btn-secondary",
                    _ => "btn btn-primary",
                };
                view! {
                    <button
                        type="button"
                        id=action.button_id()
                        class=class
                        on:click=move |_| binding.trigger(action)
                    >
                        {action.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
