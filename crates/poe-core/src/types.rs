//! # Domain Types
//!
//! Core domain types used throughout the calculator.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    PoeClass     │   │   SwitchModel   │   │ CalculatorMode  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Class1..Class8 │   │  name (unique)  │   │  ByPort         │       │
//! │  │  label          │   │  ports          │   │  ByDevice       │       │
//! │  │  wattage        │   │  poe_budget     │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐                        │
//! │  │  BudgetStatus   │   │ RecommendationPolicy │                        │
//! │  │  WithinBudget   │   │  FirstMatch          │                        │
//! │  │  ExceedsBudget  │   │  TightestFit         │                        │
//! │  └─────────────────┘   └──────────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;
use std::ops::RangeInclusive;

use crate::watts::Watts;

// =============================================================================
// PoE Class
// =============================================================================

/// A PoE power tier a powered device requires.
///
/// The set is closed: each label maps to exactly one wattage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PoeClass {
    Class1,
    Class2,
    Class3,
    Class4,
    Class5,
    Class6,
    Class7,
    Class8,
}

impl PoeClass {
    /// All classes in ascending order.
    pub const ALL: [PoeClass; 8] = [
        PoeClass::Class1,
        PoeClass::Class2,
        PoeClass::Class3,
        PoeClass::Class4,
        PoeClass::Class5,
        PoeClass::Class6,
        PoeClass::Class7,
        PoeClass::Class8,
    ];

    /// Display label, e.g. `Class 3 (15.4W)`.
    pub const fn label(&self) -> &'static str {
        match self {
            PoeClass::Class1 => "Class 1 (4W)",
            PoeClass::Class2 => "Class 2 (7W)",
            PoeClass::Class3 => "Class 3 (15.4W)",
            PoeClass::Class4 => "Class 4 (30W)",
            PoeClass::Class5 => "Class 5 (45W)",
            PoeClass::Class6 => "Class 6 (60W)",
            PoeClass::Class7 => "Class 7 (75W)",
            PoeClass::Class8 => "Class 8 (90W)",
        }
    }

    /// Typical power drawn by a device of this class.
    pub const fn wattage(&self) -> Watts {
        match self {
            PoeClass::Class1 => Watts::from_watts(4),
            PoeClass::Class2 => Watts::from_watts(7),
            PoeClass::Class3 => Watts::from_tenths(154),
            PoeClass::Class4 => Watts::from_watts(30),
            PoeClass::Class5 => Watts::from_watts(45),
            PoeClass::Class6 => Watts::from_watts(60),
            PoeClass::Class7 => Watts::from_watts(75),
            PoeClass::Class8 => Watts::from_watts(90),
        }
    }

    /// Position in [`PoeClass::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for PoeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Switch Model
// =============================================================================

/// A switch the calculator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchModel {
    /// Model name, unique within the catalog.
    pub name: &'static str,

    /// Number of PoE-capable ports.
    pub ports: u16,

    /// Total power the switch can deliver across all ports at once.
    pub poe_budget: Watts,
}

impl SwitchModel {
    /// Valid port numbers, `1..=ports`.
    pub fn port_range(&self) -> RangeInclusive<u16> {
        1..=self.ports
    }

    pub fn has_port(&self, port: u16) -> bool {
        self.port_range().contains(&port)
    }

    /// Label used in the switch selector: `Netgear GS110TP — 8 ports / 55W budget`.
    pub fn option_label(&self) -> String {
        format!(
            "{} — {} ports / {}W budget",
            self.name,
            self.ports,
            self.poe_budget.format_compact()
        )
    }

    /// Label used for a recommendation: `Cisco C9300-24P (445W budget)`.
    pub fn recommendation_label(&self) -> String {
        format!("{} ({}W budget)", self.name, self.poe_budget.format_compact())
    }
}

// =============================================================================
// Calculator Mode
// =============================================================================

/// Which half of the calculator is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorMode {
    /// Select a switch, then choose a PoE class per port.
    #[default]
    ByPort,
    /// Enter device counts, get a switch recommendation.
    ByDevice,
}

impl CalculatorMode {
    pub fn toggled(&self) -> Self {
        match self {
            CalculatorMode::ByPort => CalculatorMode::ByDevice,
            CalculatorMode::ByDevice => CalculatorMode::ByPort,
        }
    }

    /// Caption of the button that activates this mode.
    pub const fn title(&self) -> &'static str {
        match self {
            CalculatorMode::ByPort => "Select Switch → Choose PoE Class Per Port",
            CalculatorMode::ByDevice => "Enter Devices → Get Switch Recommendation",
        }
    }
}

// =============================================================================
// Budget Status
// =============================================================================

/// Outcome of comparing required power with a switch budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Required power is at or below the budget.
    WithinBudget,
    /// Required power is strictly above the budget.
    ExceedsBudget,
}

impl BudgetStatus {
    pub const fn is_within(&self) -> bool {
        matches!(self, BudgetStatus::WithinBudget)
    }
}

// =============================================================================
// Recommendation Policy
// =============================================================================

/// How a switch is picked for a device-count load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPolicy {
    /// First switch in catalog order whose budget covers the load.
    #[default]
    FirstMatch,
    /// Covering switch with the smallest budget; ties keep catalog order.
    TightestFit,
}

impl RecommendationPolicy {
    /// Parses the configuration spelling (`first_match` / `tightest_fit`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "first_match" | "first-match" => Some(RecommendationPolicy::FirstMatch),
            "tightest_fit" | "tightest-fit" => Some(RecommendationPolicy::TightestFit),
            _ => None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_index_matches_table_order() {
        for (i, class) in PoeClass::ALL.iter().enumerate() {
            assert_eq!(class.index(), i);
        }
    }

    #[test]
    fn test_class_wattages() {
        assert_eq!(PoeClass::Class3.wattage().milliwatts(), 15_400);
        assert_eq!(PoeClass::Class8.wattage(), Watts::from_watts(90));
    }

    #[test]
    fn test_switch_labels() {
        let sw = SwitchModel {
            name: "Netgear GS110TP",
            ports: 8,
            poe_budget: Watts::from_watts(55),
        };
        assert_eq!(sw.option_label(), "Netgear GS110TP — 8 ports / 55W budget");
        assert_eq!(sw.recommendation_label(), "Netgear GS110TP (55W budget)");
        assert!(sw.has_port(1));
        assert!(sw.has_port(8));
        assert!(!sw.has_port(0));
        assert!(!sw.has_port(9));
    }

    #[test]
    fn test_mode_default_and_toggle() {
        let mode = CalculatorMode::default();
        assert_eq!(mode, CalculatorMode::ByPort);
        assert_eq!(mode.toggled(), CalculatorMode::ByDevice);
        assert_eq!(mode.toggled().toggled(), CalculatorMode::ByPort);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(
            RecommendationPolicy::parse("tightest_fit"),
            Some(RecommendationPolicy::TightestFit)
        );
        assert_eq!(
            RecommendationPolicy::parse(" First-Match "),
            Some(RecommendationPolicy::FirstMatch)
        );
        assert_eq!(RecommendationPolicy::parse("cheapest"), None);
        assert_eq!(RecommendationPolicy::default(), RecommendationPolicy::FirstMatch);
    }
}
