//! Resource Client
//!
//! Typed REST calls for one resource collection.

use std::marker::PhantomData;

use serde::{de::DeserializeOwned, Deserialize};

use super::{ApiRequest, ApiResponse, HealthStatus, Method, Transport};
use crate::error::{ApiError, ApiResult};
use crate::models::{Product, Review};
use crate::query::{encode_component, SearchFilter};
use crate::resource::Resource;

/// Error body shape; every field is optional
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ResourceClient<R, T> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    pub fn new(transport: T) -> Self {
        Self { transport, _resource: PhantomData }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", R::collection_path(), encode_component(id))
    }

    pub async fn create(&self, record: &R) -> ApiResult<R> {
        let body = serde_json::to_string(record)?;
        let request = ApiRequest::new(Method::Post, R::collection_path()).with_body(body);
        let response = self.send(request).await?;
        decode(&response)
    }

    pub async fn update(&self, id: &str, record: &R) -> ApiResult<R> {
        let body = serde_json::to_string(record)?;
        let request = ApiRequest::new(Method::Put, Self::item_path(id)).with_body(body);
        let response = self.send(request).await?;
        decode(&response)
    }

    pub async fn retrieve(&self, id: &str) -> ApiResult<R> {
        let response = self.send(ApiRequest::new(Method::Get, Self::item_path(id))).await?;
        decode(&response)
    }

    /// Returns the deleted record when the service echoes it, `None` for an empty body
    pub async fn delete(&self, id: &str) -> ApiResult<Option<R>> {
        let response = self.send(ApiRequest::new(Method::Delete, Self::item_path(id))).await?;
        if response.body.trim().is_empty() {
            return Ok(None);
        }
        Ok(serde_json::from_str(&response.body).ok())
    }

    pub async fn search(&self, filter: &SearchFilter) -> ApiResult<Vec<R>> {
        let request = ApiRequest::new(Method::Get, R::collection_path()).with_query(filter.query_string());
        let response = self.send(request).await?;
        decode(&response)
    }

    pub async fn health_check(&self) -> ApiResult<HealthStatus> {
        let response = self.send(ApiRequest::new(Method::Get, "/healthcheck")).await?;
        decode(&response)
    }

    /// Send and map non-2xx statuses to `ApiError::Status`
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let method = request.method;
        let target = request.target();
        log::debug!(target: "api", "{} {}", method.as_str(), target);

        let response = self.transport.send(request).await?;
        if response.is_success() {
            return Ok(response);
        }

        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.message);
        log::warn!(target: "api", "{} {} failed with {}: {:?}", method.as_str(), target, response.status, message);
        Err(ApiError::Status { status: response.status, message })
    }
}

impl<T: Transport> ResourceClient<Product, T> {
    /// `PUT /products/<id>/review`; the service answers with the updated product
    pub async fn add_review(&self, id: &str, review: &Review) -> ApiResult<Product> {
        let body = serde_json::to_string(review)?;
        let path = format!("{}/review", Self::item_path(id));
        let response = self.send(ApiRequest::new(Method::Put, path).with_body(body)).await?;
        decode(&response)
    }
}

fn decode<V: DeserializeOwned>(response: &ApiResponse) -> ApiResult<V> {
    Ok(serde_json::from_str(&response.body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pet;
    use crate::testing::ScriptedTransport;

    #[tokio::test]
    async fn test_item_path_is_encoded() {
        let client = ResourceClient::<Pet, _>::new(ScriptedTransport::new().reply(404, "{}"));
        let err = client.retrieve("1/../2").await.unwrap_err();

        assert_eq!(client.transport().last_request().unwrap().path, "/pets/1%2F..%2F2");
        assert!(matches!(err, ApiError::Status { status: 404, message: None }));
    }

    #[tokio::test]
    async fn test_delete_tolerates_non_record_body() {
        let client = ResourceClient::<Pet, _>::new(ScriptedTransport::new().reply(200, r#"{"deleted":true}"#));
        assert!(client.delete("4").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_sends_json_body() {
        let client = ResourceClient::<Pet, _>::new(
            ScriptedTransport::new().reply(201, r#"{"id":8,"name":"Tom","category":"cat","available":true}"#),
        );
        let pet = Pet { id: None, name: "Tom".to_string(), category: "cat".to_string(), available: true };
        let created = client.create(&pet).await.unwrap();

        assert_eq!(created.id, Some(8));
        let body = client.transport().last_request().unwrap().body.unwrap();
        assert_eq!(body, r#"{"name":"Tom","category":"cat","available":true}"#);
    }

    #[tokio::test]
    async fn test_add_review_puts_to_review_path() {
        let client = ResourceClient::<Product, _>::new(ScriptedTransport::new().reply(
            200,
            r#"{"id":2,"name":"TV","price":300,"review_list":[{"username":"applefan","score":"4","date":"","detail":""}]}"#,
        ));
        let review = Review {
            username: "applefan".to_string(),
            score: 4.0,
            date: "2018-03-01".to_string(),
            detail: "sharp".to_string(),
        };
        let product = client.add_review("2", &review).await.unwrap();

        assert_eq!(product.review_list.len(), 1);
        assert_eq!(product.avg_score(), Some(4.0));
        let request = client.transport().last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.target(), "/products/2/review");
        let body: serde_json::Value = serde_json::from_str(request.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "username": "applefan", "score": 4.0, "date": "2018-03-01", "detail": "sharp" })
        );
    }

    #[tokio::test]
    async fn test_add_review_not_found_has_no_message() {
        let client = ResourceClient::<Product, _>::new(
            ScriptedTransport::new().reply(404, r#"{"error":"Product with id: 9 was not found"}"#),
        );
        let review = Review { username: "ann".to_string(), score: 3.0, date: String::new(), detail: String::new() };
        let err = client.add_review("9", &review).await.unwrap_err();

        assert!(matches!(err, ApiError::Status { status: 404, message: None }));
        assert_eq!(err.user_message(), "Server error!");
    }
}
