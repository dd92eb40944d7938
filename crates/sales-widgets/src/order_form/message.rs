//! Messages for the order form

use sales_core::Priority;

/// Messages emitted by the order form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFormMessage {
    CustomerChanged(String),
    ProductChanged(String),
    QuantityChanged(String),
    UnitPriceChanged(String),
    DueDateChanged(String),
    SalesRepChanged(String),
    SelectPriority(Priority),
    /// Confirm button pressed or Enter in an input
    Submit,
    /// Cancel button pressed
    Cancel,
    /// Click on the backdrop outside the panel
    Backdrop,
}
