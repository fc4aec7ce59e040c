//! # Switch Commands
//!
//! Commands for the switch selector.

use poe_core::catalog;
use serde::Serialize;
use tracing::{debug, info};

use super::port::{get_port_summary, PortSummary};
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Placeholder shown while no switch is chosen.
pub const NO_SWITCH_LABEL: &str = "-- Choose a switch --";

/// One entry of the switch selector.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchOption {
    pub name: &'static str,
    pub ports: u16,
    pub poe_budget_mw: i64,
    /// `Netgear GS110TP — 8 ports / 55W budget`
    pub label: String,
}

/// Lists the known switches in catalog order.
pub fn list_switches() -> Vec<SwitchOption> {
    catalog::switches()
        .iter()
        .map(|sw| SwitchOption {
            name: sw.name,
            ports: sw.ports,
            poe_budget_mw: sw.poe_budget.milliwatts(),
            label: sw.option_label(),
        })
        .collect()
}

/// Selects a switch by name, or clears the selection with `None`.
///
/// ## Behavior
/// - Port assignments are cleared on every selection change
/// - Device counts are untouched
/// - Unknown name: error, session unchanged
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Select Switch                                                       │
/// │  ◄ Netgear GS110TP — 8 ports / 55W budget ►                             │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  select_switch(Some("Netgear GS110TP"))                                 │
/// │                    │                                                    │
/// │                    ▼                                                    │
/// │  2. Assign PoE Class Per Port   (8 rows, all "None")                    │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn select_switch(
    session: &mut SessionState,
    config: &ConfigState,
    name: Option<&str>,
) -> Result<PortSummary, ApiError> {
    debug!(switch = ?name, "select_switch command");

    let selected = session.with_session_mut(|s| s.select_switch(name))?;
    match selected {
        Some(sw) => info!(switch = sw.name, ports = sw.ports, "Switch selected"),
        None => info!("Switch selection cleared"),
    }

    Ok(get_port_summary(session, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use poe_core::PoeClass;

    #[test]
    fn test_list_switches_labels() {
        let options = list_switches();
        assert_eq!(options.len(), 5);
        assert_eq!(options[0].label, "Cisco C9300-24P — 24 ports / 445W budget");
        assert_eq!(options[2].name, "Netgear GS110TP");
        assert_eq!(options[2].poe_budget_mw, 55_000);
    }

    #[test]
    fn test_select_switch_lists_ports() {
        let mut session = SessionState::new();
        let config = ConfigState::default();

        let summary = select_switch(&mut session, &config, Some("Netgear GS110TP")).unwrap();
        assert_eq!(summary.ports.len(), 8);
        assert!(summary.ports.iter().all(|p| p.class.is_none()));
    }

    #[test]
    fn test_select_unknown_switch() {
        let mut session = SessionState::new();
        let config = ConfigState::default();

        let err = select_switch(&mut session, &config, Some("Nope")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_clearing_selection_hides_ports() {
        let mut session = SessionState::new();
        let config = ConfigState::default();
        select_switch(&mut session, &config, Some("Netgear GS110TP")).unwrap();
        session
            .with_session_mut(|s| s.assign_port(1, Some(PoeClass::Class1)))
            .unwrap();

        let summary = select_switch(&mut session, &config, None).unwrap();
        assert!(summary.switch.is_none());
        assert!(summary.ports.is_empty());
        assert!(summary.report.is_none());
    }
}
