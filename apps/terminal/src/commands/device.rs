//! # Device Commands
//!
//! Device counts per PoE class and the switch recommendation.
//!
//! ## Recommendation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Class 2 (7W)   [10]  ──┐                                               │
//! │  Class 4 (30W)  [ 2]  ──┼──► total 130 W ──► first covering switch     │
//! │  others         [  ]  ──┘                     "Cisco C9300-24P (445W    │
//! │                                                budget)"                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use poe_core::power::NO_SWITCH_MESSAGE;
use poe_core::{catalog, DeviceReport, PoeClass};
use serde::Serialize;
use tracing::{debug, info};

use crate::state::{ConfigState, SessionState};

/// One PoE class as listed in both modes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassOption {
    pub class: PoeClass,
    pub label: &'static str,
    pub wattage_mw: i64,
}

/// One row of the device-count form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRow {
    pub class: PoeClass,
    pub label: &'static str,
    pub count: u32,
}

/// Everything the device view shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSummary {
    pub rows: Vec<DeviceRow>,
    pub report: DeviceReport,
    pub total_label: String,
    /// Recommended switch label, or the no-switch warning.
    pub recommendation_message: String,
}

impl DeviceSummary {
    pub fn has_recommendation(&self) -> bool {
        self.report.recommended.is_some()
    }
}

/// Lists the PoE classes in ascending order.
pub fn list_poe_classes() -> Vec<ClassOption> {
    catalog::poe_classes()
        .iter()
        .map(|class| ClassOption {
            class: *class,
            label: class.label(),
            wattage_mw: class.wattage().milliwatts(),
        })
        .collect()
}

/// Builds the device view from the session.
pub fn get_device_summary(session: &SessionState, config: &ConfigState) -> DeviceSummary {
    session.with_session(|s| {
        let rows = list_poe_classes()
            .into_iter()
            .map(|option| DeviceRow {
                class: option.class,
                label: option.label,
                count: s.device_count(option.class),
            })
            .collect();

        let report = s.device_report(config.recommendation_policy);
        DeviceSummary {
            rows,
            total_label: config.format_watts(report.total),
            recommendation_message: report.message(),
            report,
        }
    })
}

/// Stores the text typed into a class's count field.
///
/// The text is normalized (see `poe_core::validation::parse_device_count`),
/// so this never fails.
pub fn set_device_count(
    session: &mut SessionState,
    config: &ConfigState,
    class: PoeClass,
    raw: &str,
) -> DeviceSummary {
    debug!(class = ?class, raw, "set_device_count command");

    let count = session.with_session_mut(|s| s.set_device_count(class, raw));
    let summary = get_device_summary(session, config);
    if summary.recommendation_message == NO_SWITCH_MESSAGE {
        info!(count, total = %summary.report.total, "No switch covers device load");
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use poe_core::RecommendationPolicy;

    #[test]
    fn test_list_poe_classes() {
        let classes = list_poe_classes();
        assert_eq!(classes.len(), 8);
        assert_eq!(classes[2].label, "Class 3 (15.4W)");
        assert_eq!(classes[2].wattage_mw, 15_400);
        assert_eq!(classes[7].wattage_mw, 90_000);
    }

    #[test]
    fn test_empty_form_recommends_first_switch() {
        let summary = get_device_summary(&SessionState::new(), &ConfigState::default());
        assert_eq!(summary.total_label, "0.0 W");
        assert_eq!(summary.recommendation_message, "Cisco C9300-24P (445W budget)");
        assert!(summary.rows.iter().all(|r| r.count == 0));
    }

    #[test]
    fn test_counts_drive_recommendation() {
        let mut session = SessionState::new();
        let config = ConfigState::default();

        set_device_count(&mut session, &config, PoeClass::Class2, "10");
        let summary = set_device_count(&mut session, &config, PoeClass::Class4, "2");

        assert_eq!(summary.total_label, "130.0 W");
        assert_eq!(summary.rows[1].count, 10);
        assert_eq!(summary.recommendation_message, "Cisco C9300-24P (445W budget)");
        assert!(summary.has_recommendation());
    }

    #[test]
    fn test_tightest_fit_policy() {
        let mut session = SessionState::new();
        let config = ConfigState {
            recommendation_policy: RecommendationPolicy::TightestFit,
            ..ConfigState::default()
        };

        let summary = set_device_count(&mut session, &config, PoeClass::Class4, "5");
        assert_eq!(summary.recommendation_message, "Ubiquiti USW-24-PoE (200W budget)");
    }

    #[test]
    fn test_oversized_load_has_no_switch() {
        let mut session = SessionState::new();
        let config = ConfigState::default();

        let summary = set_device_count(&mut session, &config, PoeClass::Class8, "9");
        assert_eq!(summary.total_label, "810.0 W");
        assert!(!summary.has_recommendation());
        assert_eq!(summary.recommendation_message, NO_SWITCH_MESSAGE);
    }

    #[test]
    fn test_garbage_text_counts_as_zero() {
        let mut session = SessionState::new();
        let config = ConfigState::default();

        set_device_count(&mut session, &config, PoeClass::Class1, "5");
        let summary = set_device_count(&mut session, &config, PoeClass::Class1, "abc");
        assert_eq!(summary.rows[0].count, 0);
        assert_eq!(summary.total_label, "0.0 W");
    }
}
