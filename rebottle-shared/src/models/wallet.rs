use crate::config::RewardsConfig;

/// Render the monetary value of a points balance with exactly two decimals.
#[must_use]
pub fn monetary_value(config: &RewardsConfig, points: u32) -> String {
    format!("{:.2}", f64::from(points) * config.currency_per_point)
}

/// Whether the withdraw control should be enabled.
///
/// Withdrawal itself is a placeholder with no backing action; only the
/// enabled/disabled state is meaningful.
#[must_use]
pub const fn can_withdraw(points: u32) -> bool {
    points > 0
}
