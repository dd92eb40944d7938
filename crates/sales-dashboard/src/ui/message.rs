//! Application messages

use sales_widgets::{OrderFormMessage, ReportFormMessage};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// "Generate Report" pressed on the dashboard
    OpenReport,
    /// "New Order" pressed on the dashboard
    OpenOrder,
    /// Message from the report dialog
    Report(ReportFormMessage),
    /// Message from the order dialog
    Order(OrderFormMessage),
}
