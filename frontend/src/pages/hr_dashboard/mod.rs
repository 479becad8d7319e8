mod panel;

pub use panel::HrDashboardPage;
