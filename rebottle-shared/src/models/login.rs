use serde::{Deserialize, Serialize};

/// The two free-text fields on the login gate.
///
/// Any non-empty pair is accepted; there is no credential store to check
/// against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginForm {
    /// The entered e-mail address. No format validation is applied.
    pub email: String,
    /// The entered password.
    pub password: String,
}

impl LoginForm {
    /// Build a form from the current field values.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Whether the CONTINUE control should be enabled: both fields must be
    /// non-empty once trimmed.
    #[must_use]
    pub fn can_continue(&self) -> bool {
        !self.email.trim().is_empty() && !self.password.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_cannot_continue() {
        assert!(!LoginForm::default().can_continue());
    }

    #[test]
    fn test_continue_requires_both_fields() {
        assert!(!LoginForm::new("a@b.com", "").can_continue());
        assert!(!LoginForm::new("", "hunter2").can_continue());
        assert!(LoginForm::new("a@b.com", "hunter2").can_continue());
    }

    #[test]
    fn test_whitespace_only_fields_do_not_count() {
        assert!(!LoginForm::new("   ", "hunter2").can_continue());
        assert!(!LoginForm::new("a@b.com", "\t\n").can_continue());
    }

    #[test]
    fn test_any_non_empty_pair_is_accepted() {
        // There is deliberately no e-mail format check.
        assert!(LoginForm::new("not-an-email", "x").can_continue());
    }
}
