//! Health Badge Component

use leptos::prelude::*;

use crate::context::use_console;

#[component]
pub fn HealthBadge() -> impl IntoView {
    let ctx = use_console();
    view! {
        <span class=move || ctx.health.get().class()>
            {move || ctx.health.get().label()}
        </span>
    }
}
