//! HTTP Transport
//!
//! reqwest-backed `Transport`; on wasm32 reqwest goes through `fetch`.

use async_trait::async_trait;
use console_core::{ApiRequest, ApiResponse, Method, Transport, TransportError};
use reqwest::header::CONTENT_TYPE;

pub struct ReqwestTransport {
    client: reqwest::Client,
    base: String,
}

impl ReqwestTransport {
    pub fn new(base: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, request: &ApiRequest) -> String {
        format!("{}{}", self.base, request.target())
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request);
        let mut builder = self
            .client
            .request(to_reqwest(request.method), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
