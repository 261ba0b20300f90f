mod dashboard;
mod home;
mod login;

pub use dashboard::Dashboard;
pub use home::Home;
pub use login::Login;
