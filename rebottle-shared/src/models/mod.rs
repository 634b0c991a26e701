pub mod accordion;
pub mod login;
pub mod rewards;
pub mod session;
pub mod wallet;

pub use accordion::{AccordionSection, toggle};
pub use login::LoginForm;
pub use rewards::{AnyNonEmptyCode, CodeValidator, RedeemError, redeem};
pub use session::{Screen, Session};
pub use wallet::{can_withdraw, monetary_value};
