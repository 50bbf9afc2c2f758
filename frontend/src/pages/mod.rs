pub mod dashboard;
pub mod home;
pub mod login;
pub mod profile;

pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use profile::ProfilePage;
