use thiserror::Error;

use crate::config::RewardsConfig;

/// Why a redemption attempt was refused.
///
/// The views map every variant to a silent no-op; the typed error exists for
/// the validation seam below.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RedeemError {
    /// The entered code was empty (or whitespace only).
    #[error("code must not be empty")]
    EmptyCode,
    /// The validator refused the code.
    #[error("code was rejected: {0}")]
    Rejected(String),
}

/// A code-validation collaborator.
///
/// The mock-up never inspects code content, but a real deployment would check
/// codes against a registry. Keeping the check behind a trait lets that
/// service slot in without touching the views.
pub trait CodeValidator {
    /// Check whether `code` is redeemable.
    ///
    /// # Errors
    ///
    /// Returns a [`RedeemError`] describing why the code was refused.
    fn validate(&self, code: &str) -> Result<(), RedeemError>;
}

/// The mock-up's validator: any code with non-empty trimmed text passes.
///
/// Codes are never checked for reuse or matched against a registry; every
/// accepted code is worth the same fixed reward.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyNonEmptyCode;

impl CodeValidator for AnyNonEmptyCode {
    fn validate(&self, code: &str) -> Result<(), RedeemError> {
        if code.trim().is_empty() {
            Err(RedeemError::EmptyCode)
        } else {
            Ok(())
        }
    }
}

/// Run `code` through the validator and return the points to credit.
///
/// The caller applies the credit to its session; this function has no state
/// of its own.
///
/// # Errors
///
/// Returns the validator's [`RedeemError`] when the code is refused, in which
/// case nothing should be credited.
pub fn redeem(
    validator: &dyn CodeValidator,
    config: &RewardsConfig,
    code: &str,
) -> Result<u32, RedeemError> {
    validator.validate(code)?;
    Ok(config.reward_points)
}
