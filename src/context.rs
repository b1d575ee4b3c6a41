//! Console Context
//!
//! Page regions shared with components via the Leptos Context API.

use console_core::ResultsTable;
use leptos::prelude::*;

/// Outcome of the startup health check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Checking,
    Healthy,
    Unreachable,
}

impl Health {
    pub fn label(&self) -> &'static str {
        match self {
            Health::Checking => "Checking…",
            Health::Healthy => "Healthy",
            Health::Unreachable => "Unreachable",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Health::Checking => "badge badge-pending",
            Health::Healthy => "badge badge-ok",
            Health::Unreachable => "badge badge-error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    /// Status region text
    pub message: RwSignal<String>,
    /// Last successful search, if any
    pub results: RwSignal<Option<ResultsTable>>,
    pub health: RwSignal<Health>,
}

impl ConsoleContext {
    pub fn new(message: RwSignal<String>, results: RwSignal<Option<ResultsTable>>) -> Self {
        Self {
            message,
            results,
            health: RwSignal::new(Health::Checking),
        }
    }
}

pub fn use_console() -> ConsoleContext {
    use_context::<ConsoleContext>().expect("ConsoleContext should be provided")
}
