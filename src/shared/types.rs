use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: String, details: Option<Vec<String>>) -> Self {
        Self { error, details }
    }
}

/// Plain acknowledgement, e.g. after clearing all fixtures
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
