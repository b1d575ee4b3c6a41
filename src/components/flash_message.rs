//! Flash Message Component

use leptos::prelude::*;

use crate::context::use_console;

/// Status region showing the outcome of the last action
#[component]
pub fn FlashMessage() -> impl IntoView {
    let ctx = use_console();
    view! {
        <div id="flash_message" class="flash-message">
            {move || ctx.message.get()}
        </div>
    }
}
