//! # Port Commands
//!
//! Per-port class assignment and the budget summary panel.
//!
//! ## Port Mode Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌──────────┐  select_switch  ┌──────────┐  assign_port  ┌──────────┐  │
//! │  │ No switch│────────────────►│ All ports│──────────────►│ Ports    │  │
//! │  │ (hidden) │                 │  "None"  │◄──────────────│ assigned │  │
//! │  └──────────┘                 └──────────┘  select_switch└──────────┘  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use poe_core::{BudgetReport, PoeClass, SwitchModel};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Label for a port without a class.
pub const UNASSIGNED_LABEL: &str = "None";

/// One row of the port list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortRow {
    pub port: u16,
    pub class: Option<PoeClass>,
    /// Class label, or `None` when unassigned
    pub label: &'static str,
}

/// Everything the per-port view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortSummary {
    pub switch: Option<SwitchModel>,
    /// Empty while no switch is selected.
    pub ports: Vec<PortRow>,
    pub report: Option<BudgetReport>,
    /// `61.6 W`
    pub total_label: Option<String>,
    pub status_message: Option<String>,
    pub headroom_label: Option<String>,
}

/// Builds the per-port view from the session.
pub fn get_port_summary(session: &SessionState, config: &ConfigState) -> PortSummary {
    session.with_session(|s| {
        let switch = s.selected_switch();
        let ports = switch
            .map(|sw| {
                sw.port_range()
                    .map(|port| {
                        let class = s.port_class(port);
                        PortRow {
                            port,
                            class,
                            label: class.map_or(UNASSIGNED_LABEL, |c| c.label()),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();

        let report = s.budget_report();
        PortSummary {
            switch: switch.copied(),
            ports,
            total_label: report.as_ref().map(|r| config.format_watts(r.total)),
            status_message: report.as_ref().map(BudgetReport::message),
            headroom_label: report.as_ref().map(|r| config.format_watts(r.headroom)),
            report,
        }
    })
}

/// Assigns a class to a port, or clears it with `None`.
///
/// ## Errors
/// - `NO_SWITCH_SELECTED`: no switch chosen yet
/// - `OUT_OF_RANGE`: port not on the selected switch
pub fn assign_port(
    session: &mut SessionState,
    config: &ConfigState,
    port: u16,
    class: Option<PoeClass>,
) -> Result<PortSummary, ApiError> {
    debug!(port, class = ?class, "assign_port command");

    session.with_session_mut(|s| s.assign_port(port, class))?;
    Ok(get_port_summary(session, config))
}
