//! # poe-core: Pure Logic for the PoE Budget Calculator
//!
//! This crate answers two questions for a network technician:
//! does this set of powered devices fit the PoE budget of the switch I
//! picked, and which switch should I pick for these devices?
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PoE Calc Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Terminal UI (ratatui)                        │   │
//! │  │    Mode buttons ──► Switch/Port form ──► Device form           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ key events                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Commands                                     │   │
//! │  │    select_switch, assign_port, set_device_count, etc.           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ poe-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   watts   │  │  session  │  │   power   │  │   │
//! │  │   │  classes  │  │   Watts   │  │  Session  │  │ aggregate │  │   │
//! │  │   │  switches │  │  (exact)  │  │  setters  │  │ recommend │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TERMINAL • NO ENVIRONMENT • PURE FUNCTIONS       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (PoeClass, SwitchModel, modes, policies)
//! - [`watts`] - Power type with integer arithmetic (no floating point!)
//! - [`catalog`] - Compiled-in class table and switch list
//! - [`power`] - Aggregators, budget comparator, switch recommender
//! - [`session`] - Session state and its setters
//! - [`error`] - Domain error types
//! - [`validation`] - Input normalization and settings validation
//!
//! ## Example Usage
//!
//! ```rust
//! use poe_core::{BudgetStatus, PoeClass, RecommendationPolicy, Session};
//!
//! let mut session = Session::new();
//! session.select_switch(Some("Netgear GS110TP")).unwrap();
//! for port in 1..=4 {
//!     session.assign_port(port, Some(PoeClass::Class3)).unwrap();
//! }
//!
//! let report = session.budget_report().unwrap();
//! assert_eq!(report.total.to_string(), "61.6 W");
//! assert_eq!(report.status, BudgetStatus::ExceedsBudget);
//!
//! session.set_device_count(PoeClass::Class2, "10");
//! session.set_device_count(PoeClass::Class4, "2");
//! let devices = session.device_report(RecommendationPolicy::FirstMatch);
//! assert_eq!(devices.message(), "Cisco C9300-24P (445W budget)");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod error;
pub mod power;
pub mod session;
pub mod types;
pub mod validation;
pub mod watts;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use power::{BudgetReport, DeviceReport};
pub use session::Session;
pub use types::*;
pub use watts::Watts;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest count accepted for a single PoE class.
///
/// Larger input is clamped. 10 000 devices of the largest class is still
/// far beyond any catalog budget, so the recommendation is unaffected.
pub const MAX_DEVICE_COUNT: u32 = 10_000;
