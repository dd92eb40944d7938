//! User interface modules for sales-dashboard

pub mod app;
pub mod dashboard;
mod handlers;
pub mod message;

pub use app::SalesDashboardApp;
pub use message::Message;
