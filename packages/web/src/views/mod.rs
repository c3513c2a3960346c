mod layout;
pub use layout::AppLayout;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod grades;
pub use grades::Grades;

mod tasks;
pub use tasks::Tasks;

mod support;
pub use support::Support;

mod study;
pub use study::Study;

mod not_found;
pub use not_found::NotFound;
