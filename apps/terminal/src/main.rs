//! # PoE Calc Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        PoE Calc (terminal)                              │
//! │                                                                         │
//! │  main.rs ────► runs the app, reports fatal errors                      │
//! │                                                                         │
//! │  lib.rs ─────► config, logging, terminal setup, event loop             │
//! │                                                                         │
//! │  commands/ ──► select_switch, assign_port, set_device_count, ...       │
//! │                                                                         │
//! │  poe-core ───► catalog, power math, session                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    match poe_terminal_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("poe-calc: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
