//! Message handlers organized by dialog
//!
//! Each sub-module provides handler methods on SalesDashboardApp.

pub mod order;
pub mod report;
