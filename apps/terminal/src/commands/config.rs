//! # Configuration Commands

use tracing::debug;

use crate::state::ConfigState;

/// Returns the active configuration.
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_serializes_camel_case() {
        let json = serde_json::to_value(get_config(&ConfigState::default())).unwrap();
        assert_eq!(json["recommendationPolicy"], "first_match");
        assert_eq!(json["wattsDecimals"], 1);
        assert_eq!(json["printSummaryOnExit"], false);
    }
}
