//! # Session Commands
//!
//! Reset and the full snapshot printed on exit.

use chrono::{DateTime, Utc};
use poe_core::CalculatorMode;
use serde::Serialize;
use tracing::{debug, info};

use super::device::{get_device_summary, DeviceSummary};
use super::port::{get_port_summary, PortSummary};
use crate::state::{ConfigState, SessionState};

/// Both views plus session metadata.
///
/// ## Serialization
/// ```json
/// {
///   "startedAt": "2026-10-14T09:30:00Z",
///   "mode": "by_port",
///   "ports": { "switch": { "name": "Netgear GS110TP", ... }, ... },
///   "devices": { "totalLabel": "0.0 W", ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub started_at: DateTime<Utc>,
    pub mode: CalculatorMode,
    pub ports: PortSummary,
    pub devices: DeviceSummary,
}

/// Snapshot of the whole session.
pub fn get_session_summary(session: &SessionState, config: &ConfigState) -> SessionSummary {
    debug!("get_session_summary command");
    SessionSummary {
        started_at: session.with_session(|s| s.started_at()),
        mode: session.with_session(|s| s.mode()),
        ports: get_port_summary(session, config),
        devices: get_device_summary(session, config),
    }
}

/// Clears the switch, ports, counts and mode.
pub fn reset_session(session: &mut SessionState, config: &ConfigState) -> SessionSummary {
    debug!("reset_session command");
    session.with_session_mut(|s| s.reset());
    info!("Session reset");
    get_session_summary(session, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{device, port, switch};
    use poe_core::PoeClass;

    #[test]
    fn test_reset_clears_everything() {
        let mut session = SessionState::new();
        let config = ConfigState::default();
        switch::select_switch(&mut session, &config, Some("Netgear GS110TP")).unwrap();
        port::assign_port(&mut session, &config, 1, Some(PoeClass::Class4)).unwrap();
        device::set_device_count(&mut session, &config, PoeClass::Class1, "3");
        crate::commands::mode::toggle_mode(&mut session);

        let summary = reset_session(&mut session, &config);
        assert!(summary.ports.switch.is_none());
        assert_eq!(summary.mode, CalculatorMode::ByPort);
        assert_eq!(summary.devices.total_label, "0.0 W");
    }

    #[test]
    fn test_summary_json_shape() {
        let mut session = SessionState::new();
        let config = ConfigState::default();
        switch::select_switch(&mut session, &config, Some("Netgear GS110TP")).unwrap();
        port::assign_port(&mut session, &config, 2, Some(PoeClass::Class3)).unwrap();

        let json = serde_json::to_value(get_session_summary(&session, &config)).unwrap();
        assert_eq!(json["mode"], "by_port");
        assert_eq!(json["ports"]["switch"]["name"], "Netgear GS110TP");
        assert_eq!(json["ports"]["totalLabel"], "15.4 W");
        assert_eq!(json["ports"]["ports"][1]["class"], "class3");
        assert!(json["startedAt"].is_string());
    }
}
