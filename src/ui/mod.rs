pub mod app;
pub mod chat_panel;
pub mod dashboard;

pub use app::DashboardApp;
