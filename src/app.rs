//! Catalog Console App
//!
//! Picks the resource kind from config and mounts one console for it.

use std::rc::Rc;

use console_core::{FormController, Pet, Product, Resource, ResourceClient};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::binding::SignalBinding;
use crate::components::{ActionBar, FieldInput, FlashMessage, HealthBadge, ReviewForm, SearchResults};
use crate::config::{ConsoleConfig, ResourceKind};
use crate::context::{ConsoleContext, Health};
use crate::transport::ReqwestTransport;

/// Controller wired to the Leptos binding and the HTTP transport
pub type Console<R> = FormController<R, SignalBinding, ReqwestTransport>;

/// Reactive handle that keeps a console controller alive
type ConsoleHandle<R> = StoredValue<Rc<Console<R>>, LocalStorage>;

#[component]
pub fn App(config: ConsoleConfig) -> impl IntoView {
    log::info!(target: "app", "console for {:?} at {:?}", config.resource, config.api_base);
    match config.resource {
        ResourceKind::Products => resource_console::<Product>(&config, |console| {
            view! { <ReviewForm console=console /> }.into_any()
        })
        .into_any(),
        ResourceKind::Pets => resource_console::<Pet>(&config, |_| ().into_any()).into_any(),
    }
}

/// Form, buttons, status and results for one resource collection, plus any
/// resource-specific panel built by `extras`
fn resource_console<R: Resource>(
    config: &ConsoleConfig,
    extras: impl FnOnce(ConsoleHandle<R>) -> AnyView,
) -> impl IntoView {
    let binding = SignalBinding::new(R::FIELDS);
    let ctx = ConsoleContext::new(binding.message(), binding.results());
    provide_context(ctx);

    let client = ResourceClient::<R, _>::new(ReqwestTransport::new(&config.api_base));
    let controller: Rc<Console<R>> = Rc::new(FormController::new(client, binding));
    controller.bind();

    let health_check = Rc::clone(&controller);
    spawn_local(async move {
        let health = match health_check.check_health().await {
            Ok(_) => Health::Healthy,
            Err(_) => Health::Unreachable,
        };
        ctx.health.set(health);
    });

    // Buttons hold weak handles; the reactive owner keeps the controller alive.
    let handle: ConsoleHandle<R> = StoredValue::new_local(controller);

    let inputs = R::FIELDS
        .iter()
        .filter_map(|field| {
            let spec = *field;
            binding.field(spec.name).map(|value| {
                view! { <FieldInput spec=spec input_id=R::input_id(spec.name) value=value /> }
            })
        })
        .collect_view();

    view! {
        <div class="container">
            <header class="console-header">
                <h1>{format!("{} Administration", R::SINGULAR)}</h1>
                <HealthBadge />
            </header>

            <FlashMessage />

            <div class="console-form">
                {inputs}
            </div>

            <ActionBar binding=binding />

            {extras(handle)}

            <SearchResults />
        </div>
    }
}
