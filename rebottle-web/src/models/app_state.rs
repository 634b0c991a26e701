use shared::models::Session;
use std::rc::Rc;
use yew::prelude::*;

/// Root application state: the session owns the screen and the points
/// balance, and the root component passes dispatch callbacks down to the two
/// screens.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AppState {
    /// The in-memory session.
    pub session: Session,
}

/// State transitions the views can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Advance to the main screen.
    LogIn,
    /// Reset the balance and return to the login gate.
    LogOut,
    /// Credit points to the balance.
    AddPoints(u32),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut session = self.session.clone();
        match action {
            AppAction::LogIn => session.login(),
            AppAction::LogOut => session.logout(),
            AppAction::AddPoints(amount) => session.add_points(amount),
        }
        Rc::new(Self { session })
    }
}
