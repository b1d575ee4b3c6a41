//! REST API Layer
//!
//! `Transport` is the seam between the console and whatever issues HTTP
//! requests (reqwest in the browser, scripted transports in tests).

mod client;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::TransportError;

pub use client::ResourceClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A single outgoing request, relative to the API base
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Absolute path, e.g. "/products/3"
    pub path: String,
    /// Already-encoded query string without the leading '?'
    pub query: Option<String>,
    /// JSON body, sent with `Content-Type: application/json`
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), query: None, body: None }
    }

    pub fn with_query(mut self, query: String) -> Self {
        if !query.is_empty() {
            self.query = Some(query);
        }
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Path plus query, e.g. "/pets?category=dog"
    pub fn target(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }
}

/// Raw HTTP response as seen by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues HTTP requests. Futures are local to the UI thread.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Body of `GET /healthcheck`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: u16,
    #[serde(default)]
    pub message: String,
}
