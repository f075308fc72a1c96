//! JSON Response Envelope
//!
//! Success bodies are `{"result": "...", "data": ...}` (either part optional),
//! failures are `{"error_message": "..."}`.

use serde::Serialize;

/// Success body
#[derive(Debug, Clone, Serialize)]
pub struct JsonResponse<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl JsonResponse<()> {
    /// Body with only a result message
    pub fn message(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            data: None,
        }
    }
}

impl<T: Serialize> JsonResponse<T> {
    /// Body with a result message and a payload
    pub fn with_data(result: impl Into<String>, data: T) -> Self {
        Self {
            result: Some(result.into()),
            data: Some(data),
        }
    }
}

/// Failure body
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error_message: String,
}
