//! # Error Types
//!
//! Domain-specific error types for poe-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  poe-core errors (this file)                                           │
//! │  ├── CoreError        - Rejected session operations                    │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Terminal app errors                                                   │
//! │  └── ApiError         - What the UI shows (code + message)             │
//! │                                                                         │
//! │  Flow: CoreError → ApiError → status line                              │
//! │        ValidationError → ConfigError → startup warning                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! "No switch covers this load" is NOT an error. It is an ordinary
//! `None` recommendation and is shown as a warning.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Session operations that were rejected. The session is left unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Switch name is not in the catalog.
    #[error("Switch not found: {0}")]
    UnknownSwitch(String),

    /// A port was assigned before any switch was chosen.
    #[error("No switch selected")]
    NoSwitchSelected,

    /// Port number outside `1..=ports` of the selected switch.
    ///
    /// ## When This Occurs
    /// ```text
    /// Netgear GS110TP (8 ports)
    ///      │
    ///      ▼
    /// assign_port(9, Class 3)
    ///      │
    ///      ▼
    /// PortOutOfRange { port: 9, ports: 8 }
    /// ```
    #[error("Port {port} is out of range for {switch} (1-{ports})")]
    PortOutOfRange {
        switch: String,
        port: u16,
        ports: u16,
    },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PortOutOfRange {
            switch: "Netgear GS110TP".to_string(),
            port: 9,
            ports: 8,
        };
        assert_eq!(
            err.to_string(),
            "Port 9 is out of range for Netgear GS110TP (1-8)"
        );
        assert_eq!(CoreError::NoSwitchSelected.to_string(), "No switch selected");
    }

    #[test]
    fn test_validation_messages() {
        let err = ValidationError::OutOfRange {
            field: "display decimals".to_string(),
            min: 0,
            max: 3,
        };
        assert_eq!(err.to_string(), "display decimals must be between 0 and 3");
    }
}
