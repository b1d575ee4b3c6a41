//! Console Errors

use thiserror::Error;

/// Shown when a failure carries no structured message
pub const FALLBACK_MESSAGE: &str = "Server error!";

/// Local validation failure; no request is sent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} attribute cannot be empty")]
    RequiredField { label: &'static str },
    #[error("{label} attribute must be a number")]
    NotANumber { label: &'static str },
}

/// Network-level failure reported by a transport
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Transport error: {0}")]
pub struct TransportError(pub String);

/// Failure of a REST call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("Server returned {status}")]
    Status { status: u16, message: Option<String> },
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Text for the status region: the server's `message`, or the fallback
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => FALLBACK_MESSAGE.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
