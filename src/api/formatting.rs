//! Output shaping: distance rounding and JSON reply envelopes

use crate::api::error::{ApiError, ErrorKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rounds half away from zero to `decimals` digits
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Body returned in place of a result when an operation fails
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorKind,
    pub message: String,
}

impl From<&ApiError> for ErrorBody {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Status code plus JSON body, one per executed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub body: Value,
}

impl Reply {
    pub fn ok<T: Serialize>(body: &T) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status: 200, body },
            Err(e) => Self::internal(e.to_string()),
        }
    }

    pub fn no_content() -> Self {
        Self { status: 204, body: Value::Null }
    }

    pub fn error(err: &ApiError) -> Self {
        let body = serde_json::to_value(ErrorBody::from(err)).unwrap_or(Value::Null);
        Self { status: err.status_code(), body }
    }

    /// Request that could not be decoded at all
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: 400,
            body: serde_json::json!({ "error": "invalid_input", "message": message.into() }),
        }
    }

    fn internal(message: String) -> Self {
        Self {
            status: 500,
            body: serde_json::json!({ "error": "internal", "message": message }),
        }
    }
}
