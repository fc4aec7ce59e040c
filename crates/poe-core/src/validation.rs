//! # Validation Module
//!
//! Input normalization and validation for the calculator.
//!
//! ## Two Kinds of Input
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Input Handling                                     │
//! │                                                                         │
//! │  Device count fields (free text)                                       │
//! │  └── NORMALIZED, never rejected: "", "abc", "-3" all become 0          │
//! │                                                                         │
//! │  Settings (recommendation policy, display decimals)                    │
//! │  └── VALIDATED: bad values produce a ValidationError                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use poe_core::validation::parse_device_count;
//!
//! assert_eq!(parse_device_count("12"), 12);
//! assert_eq!(parse_device_count(""), 0);
//! assert_eq!(parse_device_count("-4"), 0);
//! ```

use crate::error::ValidationError;
use crate::types::RecommendationPolicy;
use crate::watts::MAX_DISPLAY_DECIMALS;
use crate::MAX_DEVICE_COUNT;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Count Normalization
// =============================================================================

/// Turns the raw text of a device-count field into a count.
///
/// ## Rules
/// - Leading whitespace is skipped, then an optional `+`/`-` sign, then
///   as many digits as follow. Anything after the digits is ignored
///   (`"12abc"` → 12, `"3.7"` → 3).
/// - No digits at all → 0.
/// - A negative value is clamped to 0.
/// - Values above [`MAX_DEVICE_COUNT`] are clamped to it.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Class 4 (30W)   [ 2_ ]                                                 │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_device_count("2") ← THIS FUNCTION                               │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  deviceCounts[Class 4] = 2  → total += 60 W                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_device_count(raw: &str) -> u32 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let mut value: u64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        value = (value * 10 + u64::from(b - b'0')).min(u64::from(MAX_DEVICE_COUNT) + 1);
    }

    if !seen_digit || negative {
        return 0;
    }

    value.min(u64::from(MAX_DEVICE_COUNT)) as u32
}

// =============================================================================
// Settings Validators
// =============================================================================

/// Validates the number of decimals used to display wattages.
///
/// ## Rules
/// - Must be between 0 and 3 (milliwatt resolution)
pub fn validate_display_decimals(decimals: i64) -> ValidationResult<u8> {
    if !(0..=i64::from(MAX_DISPLAY_DECIMALS)).contains(&decimals) {
        return Err(ValidationError::OutOfRange {
            field: "display decimals".to_string(),
            min: 0,
            max: i64::from(MAX_DISPLAY_DECIMALS),
        });
    }

    Ok(decimals as u8)
}

/// Validates a recommendation policy setting.
///
/// ## Example
/// ```rust
/// use poe_core::validation::validate_policy;
/// use poe_core::RecommendationPolicy;
///
/// assert_eq!(validate_policy("tightest_fit").unwrap(), RecommendationPolicy::TightestFit);
/// assert!(validate_policy("").is_err());
/// assert!(validate_policy("cheapest").is_err());
/// ```
pub fn validate_policy(value: &str) -> ValidationResult<RecommendationPolicy> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "recommendation policy".to_string(),
        });
    }

    RecommendationPolicy::parse(value).ok_or_else(|| ValidationError::InvalidFormat {
        field: "recommendation policy".to_string(),
        reason: "must be first_match or tightest_fit".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
