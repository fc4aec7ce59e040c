//! # Mode Commands
//!
//! Switching between the two halves of the calculator. Switching never
//! touches port assignments or device counts.

use poe_core::CalculatorMode;
use tracing::debug;

use crate::state::SessionState;

/// Activates a mode.
pub fn set_mode(session: &mut SessionState, mode: CalculatorMode) -> CalculatorMode {
    debug!(mode = ?mode, "set_mode command");
    session.with_session_mut(|s| {
        s.set_mode(mode);
        s.mode()
    })
}

/// Activates the other mode.
pub fn toggle_mode(session: &mut SessionState) -> CalculatorMode {
    debug!("toggle_mode command");
    session.with_session_mut(|s| s.toggle_mode())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_set() {
        let mut session = SessionState::new();
        assert_eq!(toggle_mode(&mut session), CalculatorMode::ByDevice);
        assert_eq!(toggle_mode(&mut session), CalculatorMode::ByPort);
        assert_eq!(
            set_mode(&mut session, CalculatorMode::ByDevice),
            CalculatorMode::ByDevice
        );
        assert_eq!(
            set_mode(&mut session, CalculatorMode::ByDevice),
            CalculatorMode::ByDevice
        );
    }
}
