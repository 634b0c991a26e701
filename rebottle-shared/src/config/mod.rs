//! # Configuration
//!
//! Policy values for the rewards programme. The client is a mock-up, so the
//! numbers are fixed here rather than fetched from a service.

use serde::{Deserialize, Serialize};

/// Rewards-programme policy values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RewardsConfig {
    /// Points credited for every accepted code.
    pub reward_points: u32,
    /// Currency value of a single point.
    pub currency_per_point: f64,
    /// How long the redemption confirmation stays on screen, in milliseconds.
    pub success_message_ms: u32,
    /// Symbol shown next to monetary amounts.
    pub currency_symbol: String,
}

impl Default for RewardsConfig {
    fn default() -> Self {
        Self {
            reward_points: 2,
            currency_per_point: 0.15,
            success_message_ms: 3_000,
            currency_symbol: "₹".to_string(),
        }
    }
}

impl RewardsConfig {
    /// Create a configuration with the standard programme values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_values() {
        let config = RewardsConfig::default();

        assert_eq!(config.reward_points, 2);
        assert!((config.currency_per_point - 0.15).abs() < f64::EPSILON);
        assert_eq!(config.success_message_ms, 3_000);
        assert_eq!(config.currency_symbol, "₹");
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = RewardsConfig::new();
        let json = serde_json::to_string(&config).expect("config should serialize");
        let restored: RewardsConfig =
            serde_json::from_str(&json).expect("config should deserialize");

        assert_eq!(restored, config);
    }
}
