mod home;
pub mod login;

pub use home::HomePage;
pub use login::LoginPage;
