pub(crate) mod app_state;

pub use app_state::{AppAction, AppState};
