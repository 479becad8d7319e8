pub mod chat;
pub mod employee;
pub mod hr_dashboard;
pub mod login;
pub mod requests;

pub use employee::EmployeePage;
pub use hr_dashboard::HrDashboardPage;
pub use login::LoginPage;
