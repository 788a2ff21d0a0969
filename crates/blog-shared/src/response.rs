//! Small fixed-shape bodies used across routes.

use serde::{Deserialize, Serialize};

/// `{ "message": ... }` body used by errors and by delete confirmations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
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

/// Liveness body served at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub active_status: bool,
    pub error: bool,
}

impl StatusResponse {
    pub fn active() -> Self {
        Self {
            active_status: true,
            error: false,
        }
    }
}
