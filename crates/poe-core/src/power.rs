//! # Power Calculations
//!
//! Pure derivations over session data: the two aggregators, the budget
//! comparator and the switch recommender.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  port assignments ──► total_port_power ──► classify_budget ──► status  │
//! │                                                 ▲                       │
//! │                                   selected switch budget                │
//! │                                                                         │
//! │  device counts ──► total_device_power ──► recommend_switch ──► switch  │
//! │                                                 ▲                       │
//! │                                        catalog (declared order)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{BudgetStatus, PoeClass, RecommendationPolicy, SwitchModel};
use crate::watts::Watts;

/// Port number → assigned class. Ports without an entry draw nothing.
pub type PortAssignments = BTreeMap<u16, PoeClass>;

/// Class → number of devices.
pub type DeviceCounts = BTreeMap<PoeClass, u32>;

// =============================================================================
// Aggregators
// =============================================================================

/// Sums the wattage of every assigned port.
///
/// ## Example
/// ```rust
/// use poe_core::power::{total_port_power, PortAssignments};
/// use poe_core::{PoeClass, Watts};
///
/// let mut ports = PortAssignments::new();
/// ports.insert(1, PoeClass::Class3);
/// ports.insert(2, PoeClass::Class4);
/// assert_eq!(total_port_power(&ports), Watts::from_tenths(454));
/// ```
pub fn total_port_power(assignments: &PortAssignments) -> Watts {
    assignments.values().map(PoeClass::wattage).sum()
}

/// Sums `class wattage × count` over every class.
///
/// ## Example
/// ```rust
/// use poe_core::power::{total_device_power, DeviceCounts};
/// use poe_core::{PoeClass, Watts};
///
/// let mut counts = DeviceCounts::new();
/// counts.insert(PoeClass::Class2, 10);
/// counts.insert(PoeClass::Class4, 2);
/// assert_eq!(total_device_power(&counts), Watts::from_watts(130));
/// ```
pub fn total_device_power(counts: &DeviceCounts) -> Watts {
    counts
        .iter()
        .map(|(class, count)| class.wattage().multiply_count(*count))
        .sum()
}

// =============================================================================
// Budget Comparator
// =============================================================================

/// Compares required power with a budget. The boundary is inclusive:
/// `total == budget` is within budget.
pub fn classify_budget(total: Watts, budget: Watts) -> BudgetStatus {
    if total > budget {
        BudgetStatus::ExceedsBudget
    } else {
        BudgetStatus::WithinBudget
    }
}

// =============================================================================
// Switch Recommender
// =============================================================================

/// Picks a switch whose budget covers `load`.
///
/// ## Policies
/// ```text
/// catalog: A (100W), B (50W)      load: 40W
///
/// FirstMatch  ──► A   (first entry with budget ≥ load)
/// TightestFit ──► B   (smallest budget ≥ load)
/// ```
///
/// Returns `None` when no switch covers the load.
pub fn recommend_switch(
    load: Watts,
    switches: &[SwitchModel],
    policy: RecommendationPolicy,
) -> Option<&SwitchModel> {
    let mut covering = switches.iter().filter(|s| s.poe_budget >= load);
    match policy {
        RecommendationPolicy::FirstMatch => covering.next(),
        // min_by_key keeps the first of equal budgets
        RecommendationPolicy::TightestFit => covering.min_by_key(|s| s.poe_budget),
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Per-port summary for the selected switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    pub switch_name: &'static str,
    pub total: Watts,
    pub budget: Watts,
    /// `budget - total`; negative when over budget.
    pub headroom: Watts,
    pub status: BudgetStatus,
    pub assigned_ports: usize,
    pub free_ports: usize,
}

impl BudgetReport {
    pub fn new(switch: &SwitchModel, assignments: &PortAssignments) -> Self {
        let total = total_port_power(assignments);
        let assigned_ports = assignments.len();
        BudgetReport {
            switch_name: switch.name,
            total,
            budget: switch.poe_budget,
            headroom: switch.poe_budget - total,
            status: classify_budget(total, switch.poe_budget),
            assigned_ports,
            free_ports: usize::from(switch.ports).saturating_sub(assigned_ports),
        }
    }

    /// Status line shown under the total.
    pub fn message(&self) -> String {
        match self.status {
            BudgetStatus::WithinBudget => "✓ Within switch PoE budget".to_string(),
            BudgetStatus::ExceedsBudget => format!(
                "⚠️ This exceeds the switch’s PoE budget ({}W)",
                self.budget.format_compact()
            ),
        }
    }
}

/// Per-device summary with the recommended switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceReport {
    pub total: Watts,
    pub device_count: u64,
    pub policy: RecommendationPolicy,
    pub recommended: Option<SwitchModel>,
}

/// Shown when no switch in the catalog covers the load.
pub const NO_SWITCH_MESSAGE: &str = "⚠️ No switch in the list meets this PoE requirement.";

impl DeviceReport {
    pub fn new(
        counts: &DeviceCounts,
        switches: &[SwitchModel],
        policy: RecommendationPolicy,
    ) -> Self {
        let total = total_device_power(counts);
        DeviceReport {
            total,
            device_count: counts.values().map(|c| u64::from(*c)).sum(),
            policy,
            recommended: recommend_switch(total, switches, policy).copied(),
        }
    }

    /// Text of the recommendation panel.
    pub fn message(&self) -> String {
        match &self.recommended {
            Some(sw) => sw.recommendation_label(),
            None => NO_SWITCH_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{switch_by_name, switches};

    fn sw(name: &'static str, budget: i64) -> SwitchModel {
        SwitchModel {
            name,
            ports: 24,
            poe_budget: Watts::from_watts(budget),
        }
    }

    #[test]
    fn test_empty_assignments_draw_nothing() {
        assert_eq!(total_port_power(&PortAssignments::new()), Watts::zero());
        assert_eq!(total_device_power(&DeviceCounts::new()), Watts::zero());
    }

    #[test]
    fn test_total_port_power_is_exact_sum() {
        let ports: PortAssignments = (1..=4).map(|p| (p, PoeClass::Class3)).collect();
        assert_eq!(total_port_power(&ports), Watts::from_tenths(616));
    }

    #[test]
    fn test_total_device_power_every_class() {
        let counts: DeviceCounts = PoeClass::ALL.iter().map(|c| (*c, 1)).collect();
        // 4 + 7 + 15.4 + 30 + 45 + 60 + 75 + 90
        assert_eq!(total_device_power(&counts), Watts::from_tenths(3264));
    }

    #[test]
    fn test_zero_counts_contribute_nothing() {
        let mut counts = DeviceCounts::new();
        counts.insert(PoeClass::Class8, 0);
        assert_eq!(total_device_power(&counts), Watts::zero());
    }

    #[test]
    fn test_classify_budget_boundary_is_inclusive() {
        let budget = Watts::from_watts(55);
        assert_eq!(classify_budget(budget, budget), BudgetStatus::WithinBudget);
        assert_eq!(
            classify_budget(budget + Watts::from_milliwatts(1), budget),
            BudgetStatus::ExceedsBudget
        );
        assert_eq!(
            classify_budget(Watts::zero(), budget),
            BudgetStatus::WithinBudget
        );
    }

    #[test]
    fn test_first_match_is_not_tightest_fit() {
        let list = [sw("A", 100), sw("B", 50)];
        let load = Watts::from_watts(40);
        let first = recommend_switch(load, &list, RecommendationPolicy::FirstMatch).unwrap();
        assert_eq!(first.name, "A");

        let tight = recommend_switch(load, &list, RecommendationPolicy::TightestFit).unwrap();
        assert_eq!(tight.name, "B");
    }

    #[test]
    fn test_first_match_skips_small_switches() {
        let list = [sw("A", 100), sw("B", 50)];
        let found = recommend_switch(Watts::from_watts(60), &list, RecommendationPolicy::FirstMatch);
        assert_eq!(found.map(|s| s.name), Some("A"));

        let list = [sw("B", 50), sw("A", 100)];
        let found = recommend_switch(Watts::from_watts(60), &list, RecommendationPolicy::FirstMatch);
        assert_eq!(found.map(|s| s.name), Some("A"));
    }

    #[test]
    fn test_tightest_fit_ties_keep_catalog_order() {
        let list = [sw("A", 100), sw("B", 100)];
        let found = recommend_switch(Watts::zero(), &list, RecommendationPolicy::TightestFit);
        assert_eq!(found.map(|s| s.name), Some("A"));
    }

    #[test]
    fn test_no_switch_covers_load() {
        for policy in [RecommendationPolicy::FirstMatch, RecommendationPolicy::TightestFit] {
            assert!(recommend_switch(Watts::from_watts(1000), switches(), policy).is_none());
        }
    }

    #[test]
    fn test_budget_report_headroom_and_message() {
        let netgear = switch_by_name("Netgear GS110TP").unwrap();
        let ports: PortAssignments = (1..=4).map(|p| (p, PoeClass::Class3)).collect();
        let report = BudgetReport::new(netgear, &ports);

        assert_eq!(report.status, BudgetStatus::ExceedsBudget);
        assert_eq!(report.headroom, Watts::from_tenths(-66));
        assert_eq!(report.assigned_ports, 4);
        assert_eq!(report.free_ports, 4);
        assert_eq!(
            report.message(),
            "⚠️ This exceeds the switch’s PoE budget (55W)"
        );
    }

    #[test]
    fn test_device_report_message() {
        let empty = DeviceReport::new(&DeviceCounts::new(), switches(), RecommendationPolicy::FirstMatch);
        assert_eq!(empty.message(), "Cisco C9300-24P (445W budget)");
        assert_eq!(empty.device_count, 0);

        let mut counts = DeviceCounts::new();
        counts.insert(PoeClass::Class8, 12);
        let report = DeviceReport::new(&counts, switches(), RecommendationPolicy::FirstMatch);
        assert_eq!(report.total, Watts::from_watts(1080));
        assert!(report.recommended.is_none());
        assert_eq!(report.message(), NO_SWITCH_MESSAGE);
    }
}
