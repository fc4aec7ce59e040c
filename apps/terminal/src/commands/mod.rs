//! # Commands Module
//!
//! Every operation the UI can perform on the calculator.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── switch.rs   ◄─── Switch catalog and selection
//! ├── port.rs     ◄─── Per-port class assignment and budget summary
//! ├── device.rs   ◄─── Device counts and switch recommendation
//! ├── mode.rs     ◄─── Mode toggle
//! ├── session.rs  ◄─── Reset and full snapshot
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  ui::App::handle_key(→)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::port::assign_port(                                           │
//! │      &mut SessionState,   ◄── state the command needs                  │
//! │      &ConfigState,        ◄── only if it formats output                │
//! │      port, class,         ◄── from the key event                       │
//! │  ) -> Result<PortSummary, ApiError>                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  UI redraws from the returned DTOs                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands never touch the terminal, so they are tested directly.

pub mod config;
pub mod device;
pub mod mode;
pub mod port;
pub mod session;
pub mod switch;
