use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The screen the client is currently showing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// The login gate shown before any points are visible.
    #[default]
    Login,
    /// The points dashboard with the redeem/wallet/withdraw accordion.
    Main,
}

impl Screen {
    /// Return the canonical string representation of the screen.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Main => "main",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Screen {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "login" => Ok(Self::Login),
            "main" => Ok(Self::Main),
            _ => Err("unknown screen"),
        }
    }
}

/// In-memory session state: the active screen plus the accumulated points.
///
/// Nothing here survives a reload. The balance lives in a `u32`, so it can
/// never go negative.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    screen: Screen,
    points: u32,
}

impl Session {
    /// Create a fresh session at the login gate with zero points.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The screen the session is currently on.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// The accumulated points balance.
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.points
    }

    /// Advance to the main screen. Always succeeds; no credentials are
    /// verified anywhere in the mock-up.
    pub fn login(&mut self) {
        self.screen = Screen::Main;
    }

    /// Return to the login gate and forfeit the balance.
    pub fn logout(&mut self) {
        self.points = 0;
        self.screen = Screen::Login;
    }

    /// Credit `amount` points to the balance.
    pub fn add_points(&mut self, amount: u32) {
        self.points = self.points.saturating_add(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RewardsConfig;
    use crate::models::{AnyNonEmptyCode, monetary_value, redeem};

    #[test]
    fn test_new_session_starts_at_login_with_zero_points() {
        let session = Session::new();

        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.points(), 0);
    }

    #[test]
    fn test_login_shows_main_and_keeps_balance() {
        let mut session = Session::new();
        session.login();

        assert_eq!(session.screen(), Screen::Main);
        assert_eq!(session.points(), 0, "first login starts from zero");
    }

    #[test]
    fn test_logout_resets_points_regardless_of_balance() {
        let mut session = Session::new();
        session.login();
        session.add_points(42);
        session.logout();

        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.points(), 0);
    }

    #[test]
    fn test_add_points_accumulates() {
        let mut session = Session::new();
        session.add_points(2);
        session.add_points(2);
        session.add_points(2);

        assert_eq!(session.points(), 6);
    }

    #[test]
    fn test_add_points_saturates_instead_of_wrapping() {
        let mut session = Session::new();
        session.add_points(u32::MAX);
        session.add_points(2);

        assert_eq!(session.points(), u32::MAX);
    }

    #[test]
    fn test_screen_string_round_trip() {
        for screen in [Screen::Login, Screen::Main] {
            let parsed: Screen = screen.as_str().parse().expect("known screen");
            assert_eq!(parsed, screen);
        }
        assert!("dashboard".parse::<Screen>().is_err());
    }

    /// End-to-end walk through the flow: login, redeem a code, attempt an
    /// empty redemption, then log out.
    #[test]
    fn test_full_session_scenario() {
        let config = RewardsConfig::default();
        let validator = AnyNonEmptyCode;
        let mut session = Session::new();

        session.login();
        assert_eq!(session.screen(), Screen::Main);
        assert_eq!(session.points(), 0);

        let credited = redeem(&validator, &config, "ABC").expect("non-empty code");
        session.add_points(credited);
        assert_eq!(session.points(), 2);
        assert_eq!(monetary_value(&config, session.points()), "0.30");

        assert!(redeem(&validator, &config, "").is_err());
        assert_eq!(session.points(), 2, "empty code leaves the balance alone");

        session.logout();
        assert_eq!(session.screen(), Screen::Login);
        assert_eq!(session.points(), 0);
    }
}
