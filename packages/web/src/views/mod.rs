mod login;
pub use login::Login;

mod shell;
pub use shell::Shell;

mod dashboard;
pub use dashboard::Dashboard;

mod employees;
pub use employees::Employees;

mod not_found;
pub use not_found::NotFound;
