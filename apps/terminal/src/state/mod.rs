//! # State Module
//!
//! Manages application state for the terminal app.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types:
//!
//! 1. **Separation of Concerns**: session data changes on every key press,
//!    configuration never changes after startup
//! 2. **Clearer Command Signatures**: commands declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      App (ui module)                            │   │
//! │  │  session: SessionState                                          │   │
//! │  │  config:  ConfigState                                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                 ┌────────────┴────────────┐                            │
//! │                 ▼                         ▼                             │
//! │  ┌──────────────────────┐     ┌──────────────────────┐                 │
//! │  │    SessionState      │     │    ConfigState       │                 │
//! │  │                      │     │                      │                 │
//! │  │  poe_core::Session   │     │  policy, decimals,   │                 │
//! │  │  (mutable)           │     │  log dir (read-only) │                 │
//! │  └──────────────────────┘     └──────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::{
    ConfigError, ConfigState, ENV_LOG_DIR, ENV_PRINT_SUMMARY, ENV_RECOMMENDATION,
    ENV_WATTS_DECIMALS,
};
pub use session::SessionState;
