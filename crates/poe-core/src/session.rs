//! # Calculator Session
//!
//! The transient state of one calculator session and the setters that
//! are the only way to change it.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  User Action              Setter                   State Change          │
//! │  ───────────              ──────                   ────────────          │
//! │                                                                         │
//! │  Pick switch ───────────► select_switch() ───────► switch = X,          │
//! │                                                    ports cleared        │
//! │                                                                         │
//! │  Pick port class ───────► assign_port() ─────────► ports[n] = class     │
//! │                                                                         │
//! │  Type device count ─────► set_device_count() ────► counts[class] = n    │
//! │                                                                         │
//! │  Click mode button ─────► set_mode() ────────────► mode = m             │
//! │                                                                         │
//! │  Reset ─────────────────► reset() ───────────────► initial state        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Every key of the port map lies in `1..=selected_switch.ports`
//! - The port map is empty whenever no switch is selected
//! - Changing mode never touches ports or counts

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog;
use crate::error::{CoreError, CoreResult};
use crate::power::{
    total_device_power, total_port_power, BudgetReport, DeviceCounts, DeviceReport,
    PortAssignments,
};
use crate::types::{CalculatorMode, PoeClass, RecommendationPolicy, SwitchModel};
use crate::validation::parse_device_count;
use crate::watts::Watts;

/// State of one calculator session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    selected_switch: Option<&'static SwitchModel>,
    port_assignments: PortAssignments,
    device_counts: DeviceCounts,
    mode: CalculatorMode,
    started_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session in its initial state: no switch, nothing
    /// assigned, no devices, per-port mode.
    pub fn new() -> Self {
        Session {
            selected_switch: None,
            port_assignments: PortAssignments::new(),
            device_counts: DeviceCounts::new(),
            mode: CalculatorMode::default(),
            started_at: Utc::now(),
        }
    }

    // -------------------------------------------------------------------------
    // Switch selection
    // -------------------------------------------------------------------------

    pub fn selected_switch(&self) -> Option<&'static SwitchModel> {
        self.selected_switch
    }

    /// Selects a switch by name, or clears the selection with `None`.
    ///
    /// Port assignments are always cleared. An unknown name is rejected
    /// and the session is left as it was.
    ///
    /// ## Example
    /// ```rust
    /// use poe_core::{PoeClass, Session};
    ///
    /// let mut session = Session::new();
    /// session.select_switch(Some("Netgear GS110TP")).unwrap();
    /// session.assign_port(1, Some(PoeClass::Class3)).unwrap();
    ///
    /// session.select_switch(Some("Cisco C9300-24P")).unwrap();
    /// assert!(session.port_assignments().is_empty());
    /// ```
    pub fn select_switch(&mut self, name: Option<&str>) -> CoreResult<Option<&'static SwitchModel>> {
        let switch = name.map(catalog::switch_by_name).transpose()?;
        self.selected_switch = switch;
        self.port_assignments.clear();
        Ok(switch)
    }

    // -------------------------------------------------------------------------
    // Port assignments
    // -------------------------------------------------------------------------

    pub fn port_assignments(&self) -> &PortAssignments {
        &self.port_assignments
    }

    /// Class assigned to a port, if any.
    pub fn port_class(&self, port: u16) -> Option<PoeClass> {
        self.port_assignments.get(&port).copied()
    }

    /// Assigns a class to a port of the selected switch. `None` clears it.
    ///
    /// ## Errors
    /// - [`CoreError::NoSwitchSelected`] when no switch is chosen
    /// - [`CoreError::PortOutOfRange`] when `port` is not `1..=ports`
    pub fn assign_port(&mut self, port: u16, class: Option<PoeClass>) -> CoreResult<()> {
        let switch = self.selected_switch.ok_or(CoreError::NoSwitchSelected)?;
        if !switch.has_port(port) {
            return Err(CoreError::PortOutOfRange {
                switch: switch.name.to_string(),
                port,
                ports: switch.ports,
            });
        }

        match class {
            Some(class) => {
                self.port_assignments.insert(port, class);
            }
            None => {
                self.port_assignments.remove(&port);
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Device counts
    // -------------------------------------------------------------------------

    pub fn device_counts(&self) -> &DeviceCounts {
        &self.device_counts
    }

    pub fn device_count(&self, class: PoeClass) -> u32 {
        self.device_counts.get(&class).copied().unwrap_or(0)
    }

    /// Stores the count typed into a class's field and returns the
    /// normalized value. See [`parse_device_count`] for the rules.
    pub fn set_device_count(&mut self, class: PoeClass, raw: &str) -> u32 {
        let count = parse_device_count(raw);
        if count == 0 {
            self.device_counts.remove(&class);
        } else {
            self.device_counts.insert(class, count);
        }
        count
    }

    // -------------------------------------------------------------------------
    // Mode
    // -------------------------------------------------------------------------

    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CalculatorMode) {
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> CalculatorMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    // -------------------------------------------------------------------------
    // Derived values
    // -------------------------------------------------------------------------

    /// Power drawn by the assigned ports.
    pub fn total_port_power(&self) -> Watts {
        total_port_power(&self.port_assignments)
    }

    /// Power drawn by all entered devices.
    pub fn device_total_power(&self) -> Watts {
        total_device_power(&self.device_counts)
    }

    /// Budget check for the selected switch; `None` when no switch is chosen.
    pub fn budget_report(&self) -> Option<BudgetReport> {
        self.selected_switch
            .map(|sw| BudgetReport::new(sw, &self.port_assignments))
    }

    /// Device total and the switch recommended for it.
    pub fn device_report(&self, policy: RecommendationPolicy) -> DeviceReport {
        DeviceReport::new(&self.device_counts, catalog::switches(), policy)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns the session to its initial state.
    pub fn reset(&mut self) {
        *self = Session::new();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
