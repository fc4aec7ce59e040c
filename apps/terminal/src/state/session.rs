//! # Session State
//!
//! Owns the calculator session for the lifetime of the app.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Key Event                Command                 Session Change        │
//! │  ─────────                ───────                 ──────────────        │
//! │                                                                         │
//! │  ←/→ on switch row ──────► select_switch() ──────► switch, ports reset │
//! │                                                                         │
//! │  ←/→ on a port row ──────► assign_port() ────────► ports[n] = class    │
//! │                                                                         │
//! │  digit in count field ───► set_device_count() ───► counts[class] = n   │
//! │                                                                         │
//! │  1 / 2 / Tab ────────────► set_mode() ───────────► mode                │
//! │                                                                         │
//! │  View refresh ───────────► get_*_summary() ──────► (read only)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Events arrive one at a time on the UI thread, so the session is owned
//! outright; there is no lock.

use poe_core::Session;

/// App-owned calculator session.
#[derive(Debug, Default)]
pub struct SessionState {
    session: Session,
}

impl SessionState {
    /// Creates a fresh session.
    pub fn new() -> Self {
        SessionState {
            session: Session::new(),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = session_state.with_session(|s| s.total_port_power());
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&mut self, f: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        f(&mut self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poe_core::{CalculatorMode, PoeClass};

    #[test]
    fn test_mutations_are_visible_to_readers() {
        let mut state = SessionState::new();
        state.with_session_mut(|s| {
            s.set_mode(CalculatorMode::ByDevice);
            s.set_device_count(PoeClass::Class4, "2");
        });

        assert_eq!(state.with_session(|s| s.mode()), CalculatorMode::ByDevice);
        assert_eq!(state.with_session(|s| s.device_count(PoeClass::Class4)), 2);
    }
}
