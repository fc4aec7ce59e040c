//! # Catalog
//!
//! Compiled-in reference data: the PoE class table and the known switches.
//! Nothing here can be mutated at runtime.
//!
//! ## Switch Order Matters
//! [`SWITCHES`] is kept in its declared order, not sorted by budget. The
//! default recommendation policy walks it front to back and returns the
//! first switch that covers the load.

use crate::error::{CoreError, CoreResult};
use crate::types::{PoeClass, SwitchModel};
use crate::watts::Watts;

/// Known switch models, in declared order.
pub static SWITCHES: [SwitchModel; 5] = [
    SwitchModel {
        name: "Cisco C9300-24P",
        ports: 24,
        poe_budget: Watts::from_watts(445),
    },
    SwitchModel {
        name: "Cisco C9300-48P",
        ports: 48,
        poe_budget: Watts::from_watts(740),
    },
    SwitchModel {
        name: "Netgear GS110TP",
        ports: 8,
        poe_budget: Watts::from_watts(55),
    },
    SwitchModel {
        name: "Ubiquiti USW-24-PoE",
        ports: 24,
        poe_budget: Watts::from_watts(200),
    },
    SwitchModel {
        name: "Ubiquiti USW-48-PoE",
        ports: 48,
        poe_budget: Watts::from_watts(400),
    },
];

/// All known switches.
pub fn switches() -> &'static [SwitchModel] {
    &SWITCHES
}

/// All PoE classes, lowest power first.
pub fn poe_classes() -> &'static [PoeClass] {
    &PoeClass::ALL
}

/// Finds a switch by its exact model name.
///
/// ## Example
/// ```rust
/// use poe_core::catalog::switch_by_name;
///
/// let sw = switch_by_name("Netgear GS110TP").unwrap();
/// assert_eq!(sw.ports, 8);
/// assert!(switch_by_name("Juniper EX2300").is_err());
/// ```
pub fn switch_by_name(name: &str) -> CoreResult<&'static SwitchModel> {
    SWITCHES
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| CoreError::UnknownSwitch(name.to_string()))
}
