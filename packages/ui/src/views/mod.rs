mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod shell;
pub use shell::ShellView;

mod login;
pub use login::LoginView;

mod dashboard;
pub use dashboard::DashboardView;

mod employee_list;
pub use employee_list::EmployeeListView;
