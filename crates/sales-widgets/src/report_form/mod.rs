//! Report Form Widget
//!
//! Dialog for configuring a sales report: report type, date range and
//! export format. All four fields are required.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │  Generate Sales Report                        │
//! │  Configure report parameters and ...          │
//! ├───────────────────────────────────────────────┤
//! │  Report Type *  [Sales Summary ▾]             │
//! │  Start Date *   [yyyy-mm-dd      ]            │
//! │  End Date *     [yyyy-mm-dd      ]            │
//! │  Format *       [PDF ▾]                       │
//! │                   [Cancel] [Generate Report]  │
//! └───────────────────────────────────────────────┘
//! ```

mod message;
mod view;

pub use message::ReportFormMessage;
pub use view::{report_form_modal, report_form_view};

use sales_core::{Field, ReportDraft, ReportRequest, ValidationErrors};

use crate::form::{finish_submit, FormEvent};
use crate::modal::ModalHeader;

/// State for an open report form
///
/// Created fresh from the caller's defaults every time the dialog opens and
/// dropped when it closes.
#[derive(Debug, Clone, Default)]
pub struct ReportFormState {
    /// Current field values
    pub draft: ReportDraft,
    /// Errors from the last blocked submit
    pub errors: ValidationErrors,
}

impl ReportFormState {
    pub const TITLE: &'static str = "Generate Sales Report";
    pub const SUBTITLE: &'static str = "Configure report parameters and generate sales analytics";
    pub const SUBMIT_LABEL: &'static str = "Generate Report";

    /// Seed a form from defaults
    pub fn new(defaults: &ReportDraft) -> Self {
        Self {
            draft: defaults.clone(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn header() -> ModalHeader {
        ModalHeader::new(Self::TITLE).with_subtitle(Self::SUBTITLE)
    }

    /// Handle a message and update state
    ///
    /// Returns the event the host must act on, if any. `Submit` only yields
    /// an event when every field passes its constraints; `Cancel` and
    /// `Backdrop` close without validating.
    pub fn update(&mut self, message: ReportFormMessage) -> Option<FormEvent<ReportRequest>> {
        match message {
            ReportFormMessage::SelectReportType(report_type) => {
                self.draft.report_type = report_type;
                None
            }
            ReportFormMessage::StartDateChanged(value) => {
                self.draft.start_date = value;
                self.errors.clear(Field::StartDate);
                None
            }
            ReportFormMessage::EndDateChanged(value) => {
                self.draft.end_date = value;
                self.errors.clear(Field::EndDate);
                None
            }
            ReportFormMessage::SelectFormat(format) => {
                self.draft.format = format;
                None
            }
            ReportFormMessage::Submit => {
                finish_submit(self.draft.validate(), &mut self.errors, "Report form")
            }
            ReportFormMessage::Cancel | ReportFormMessage::Backdrop => Some(FormEvent::Close),
        }
    }
}
