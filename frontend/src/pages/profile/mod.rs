mod panel;

pub use panel::ProfilePage;
