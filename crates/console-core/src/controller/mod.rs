//! Form Controller
//!
//! Translates button actions into REST calls and reflects the outcome into the
//! bound form, status region and results table.


use std::rc::Rc;

use crate::api::{HealthStatus, ResourceClient, Transport};
use crate::binding::{Action, ActionFuture, ActionHandler, FormBinding};
use crate::error::{ApiResult, ValidationError, FALLBACK_MESSAGE};
use crate::models::{Product, Review};
use crate::query::SearchFilter;
use crate::resource::{FormValues, Resource};
use crate::sequence::{Region, RequestSequencer, RequestToken};
use crate::table::ResultsTable;

pub const SUCCESS_MESSAGE: &str = "Success";

pub struct FormController<R, B, T> {
    client: ResourceClient<R, T>,
    binding: B,
    sequencer: RequestSequencer,
}

impl<R, B, T> FormController<R, B, T>
where
    R: Resource,
    B: FormBinding + 'static,
    T: Transport + 'static,
{
    pub fn new(client: ResourceClient<R, T>, binding: B) -> Self {
        Self { client, binding, sequencer: RequestSequencer::new() }
    }

    pub fn binding(&self) -> &B {
        &self.binding
    }

    pub fn client(&self) -> &ResourceClient<R, T> {
        &self.client
    }

    /// Register a click handler for every action. Handlers hold a weak
    /// reference, so dropping the controller disarms the buttons.
    pub fn bind(self: &Rc<Self>) {
        for action in Action::ALL {
            let controller = Rc::downgrade(self);
            let handler: ActionHandler = Rc::new(move || -> ActionFuture {
                let controller = controller.clone();
                Box::pin(async move {
                    if let Some(controller) = controller.upgrade() {
                        controller.dispatch(action).await;
                    }
                })
            });
            self.binding.on_click(action, handler);
        }
        log::debug!(target: "controller", "bound {} actions for /{}", Action::ALL.len(), R::COLLECTION);
    }

    pub async fn dispatch(&self, action: Action) {
        match action {
            Action::Create => self.create().await,
            Action::Update => self.update().await,
            Action::Retrieve => self.retrieve().await,
            Action::Delete => self.delete().await,
            Action::Clear => self.clear(),
            Action::Search => self.search().await,
        }
    }

    pub async fn create(&self) {
        let form = self.read_form();
        if let Err(err) = validate::<R>(&form) {
            log::info!(target: "controller", "create rejected: {}", err);
            self.binding.flash_message(&err.to_string());
            return;
        }

        let token = self.sequencer.begin(Region::Form);
        let result = self.client.create(&R::from_form(&form)).await;
        if !self.accept(token, Action::Create.label()) {
            return;
        }
        match result {
            Ok(record) => {
                log::info!(target: "controller", "created {} {:?}", R::SINGULAR, record.id());
                self.write_record(&record);
                self.binding.flash_message(SUCCESS_MESSAGE);
            }
            Err(err) => self.binding.flash_message(&err.user_message()),
        }
    }

    pub async fn update(&self) {
        let form = self.read_form();
        let id = form.get("id").to_string();

        let token = self.sequencer.begin(Region::Form);
        let result = self.client.update(&id, &R::from_form(&form)).await;
        if !self.accept(token, Action::Update.label()) {
            return;
        }
        match result {
            Ok(record) => {
                log::info!(target: "controller", "updated {} {}", R::SINGULAR, id);
                self.write_record(&record);
                self.binding.flash_message(SUCCESS_MESSAGE);
            }
            Err(err) => self.binding.flash_message(&err.user_message()),
        }
    }

    pub async fn retrieve(&self) {
        let id = self.binding.get_field("id");

        let token = self.sequencer.begin(Region::Form);
        let result = self.client.retrieve(&id).await;
        if !self.accept(token, Action::Retrieve.label()) {
            return;
        }
        match result {
            Ok(record) => {
                self.write_record(&record);
                self.binding.flash_message(SUCCESS_MESSAGE);
            }
            Err(err) => {
                self.clear_form();
                self.binding.flash_message(&err.user_message());
            }
        }
    }

    pub async fn delete(&self) {
        let id = self.binding.get_field("id");

        let token = self.sequencer.begin(Region::Form);
        let result = self.client.delete(&id).await;
        if !self.accept(token, Action::Delete.label()) {
            return;
        }
        match result {
            Ok(record) => {
                let deleted = record
                    .and_then(|r| r.id())
                    .map(|id| id.to_string())
                    .unwrap_or(id);
                log::info!(target: "controller", "deleted {} {}", R::SINGULAR, deleted);
                self.clear_form();
                self.binding
                    .flash_message(&format!("{} with ID [{}] has been Deleted!", R::SINGULAR, deleted));
            }
            Err(err) => {
                log::warn!(target: "controller", "delete {} failed: {}", id, err);
                self.binding.flash_message(FALLBACK_MESSAGE);
            }
        }
    }

    /// Reset every field; responses still in flight for the form are dropped
    pub fn clear(&self) {
        self.sequencer.begin(Region::Form);
        self.clear_form();
    }

    pub async fn search(&self) {
        let filter = SearchFilter::from_form::<R>(&self.read_form());

        let token = self.sequencer.begin(Region::Results);
        let result = self.client.search(&filter).await;
        if !self.accept(token, Action::Search.label()) {
            return;
        }
        match result {
            Ok(records) => {
                let table = ResultsTable::from_records(&records);
                if table.is_empty() {
                    log::info!(target: "controller", "search matched no {}", R::COLLECTION);
                } else {
                    log::info!(target: "controller", "search returned {} {}", table.len(), R::COLLECTION);
                }
                self.binding.render_table(&table);
                self.binding.flash_message(SUCCESS_MESSAGE);
            }
            Err(err) => self.binding.flash_message(&err.user_message()),
        }
    }

    pub async fn check_health(&self) -> ApiResult<HealthStatus> {
        let result = self.client.health_check().await;
        match &result {
            Ok(health) => log::info!(target: "controller", "service health: {}", health.message),
            Err(err) => log::warn!(target: "controller", "health check failed: {}", err),
        }
        result
    }

    fn accept(&self, token: RequestToken, label: &str) -> bool {
        let current = self.sequencer.is_current(token);
        if !current {
            log::debug!(target: "controller", "dropping stale {} response", label);
        }
        current
    }

    fn read_form(&self) -> FormValues {
        let mut form = FormValues::new();
        for field in R::FIELDS {
            form.set(field.name, self.binding.get_field(field.name));
        }
        form
    }

    /// Overwrite every record field; fields missing from the record become ""
    fn write_record(&self, record: &R) {
        let values = record.to_form();
        for field in R::record_fields() {
            self.binding.set_field(field.name, values.get(field.name));
        }
    }

    fn clear_form(&self) {
        for field in R::FIELDS {
            self.binding.set_field(field.name, "");
        }
    }
}

impl<B, T> FormController<Product, B, T>
where
    B: FormBinding + 'static,
    T: Transport + 'static,
{
    /// Attach a review to the product whose id is in the form. The returned
    /// product overwrites the form, like a retrieve.
    pub async fn add_review(&self, values: &FormValues) {
        let review = match Review::from_form(values) {
            Ok(review) => review,
            Err(err) => {
                log::info!(target: "controller", "review rejected: {}", err);
                self.binding.flash_message(&err.to_string());
                return;
            }
        };
        let id = self.binding.get_field("id");

        let token = self.sequencer.begin(Region::Form);
        let result = self.client.add_review(&id, &review).await;
        if !self.accept(token, "Review") {
            return;
        }
        match result {
            Ok(product) => {
                log::info!(target: "controller", "review by {} added to product {}", review.username, id);
                self.write_record(&product);
                self.binding.flash_message(SUCCESS_MESSAGE);
            }
            Err(err) => self.binding.flash_message(&err.user_message()),
        }
    }
}

/// Required fields must be non-empty before a create is sent
pub fn validate<R: Resource>(form: &FormValues) -> Result<(), ValidationError> {
    match R::FIELDS.iter().find(|f| f.required && form.get(f.name).is_empty()) {
        Some(field) => Err(ValidationError::RequiredField { label: field.label }),
        None => Ok(()),
    }
}
