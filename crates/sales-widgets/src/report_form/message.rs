//! Messages for the report form

use sales_core::{ExportFormat, ReportType};

/// Messages emitted by the report form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportFormMessage {
    /// Report type picked from the list
    SelectReportType(ReportType),
    /// Start date input edited
    StartDateChanged(String),
    /// End date input edited
    EndDateChanged(String),
    /// Export format picked from the list
    SelectFormat(ExportFormat),
    /// Confirm button pressed or Enter in an input
    Submit,
    /// Cancel button pressed
    Cancel,
    /// Click on the backdrop outside the panel
    Backdrop,
}
