//! # API Error Type
//!
//! Unified error type for commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in PoE Calc                               │
//! │                                                                         │
//! │  UI (key event)              Command                                    │
//! │  ──────────────              ───────                                    │
//! │                                                                         │
//! │  ← on port 9 of 8                                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  assign_port(..) -> Result<PortSummary, ApiError>                │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  CoreError::PortOutOfRange ───────────────────► ApiError ───────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  ◄────────────────────────────────────────────────────────────────────  │
//! │                                                                         │
//! │  status line: "Port 9 is out of range for Netgear GS110TP (1-8)"        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error is recoverable: the UI shows the message and keeps running.

use poe_core::CoreError;
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "OUT_OF_RANGE",
///   "message": "Port 9 is out of range for Netgear GS110TP (1-8)"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Switch not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Operation needs a selected switch
    NoSwitchSelected,

    /// Port number outside the switch's ports
    OutOfRange,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownSwitch(name) => ApiError::not_found("Switch", &name),
            CoreError::NoSwitchSelected => {
                ApiError::new(ErrorCode::NoSwitchSelected, "Choose a switch first")
            }
            e @ CoreError::PortOutOfRange { .. } => {
                ApiError::new(ErrorCode::OutOfRange, e.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err: ApiError = CoreError::UnknownSwitch("Juniper EX2300".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Switch not found: Juniper EX2300");

        let err: ApiError = CoreError::NoSwitchSelected.into();
        assert_eq!(err.code, ErrorCode::NoSwitchSelected);

        let err: ApiError = CoreError::PortOutOfRange {
            switch: "Netgear GS110TP".to_string(),
            port: 9,
            ports: 8,
        }
        .into();
        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(err.message, "Port 9 is out of range for Netgear GS110TP (1-8)");
    }

    #[test]
    fn test_serializes_code_and_message() {
        let err = ApiError::not_found("Switch", "X");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Switch not found: X");
    }
}
