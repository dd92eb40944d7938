//! Report dialog message handlers
//!
//! Handles: OpenReport, Report(ReportFormMessage)

use iced::Task;
use sales_widgets::{FormEvent, ReportFormMessage, ReportFormState};

use super::super::app::SalesDashboardApp;
use super::super::message::Message;
use crate::activity::Submission;

impl SalesDashboardApp {
    /// Handle OpenReport message
    pub fn handle_open_report(&mut self) -> Task<Message> {
        // Fresh draft from the configured defaults on every open
        self.report_form = ReportFormState::new(&self.config.defaults.report);
        self.report_open = true;
        self.order_open = false;
        log::info!("Report dialog opened");
        Task::none()
    }

    /// Handle a message from the report dialog
    pub fn handle_report_message(&mut self, message: ReportFormMessage) -> Task<Message> {
        if !self.report_open {
            log::debug!("Ignoring {:?}: report dialog is closed", message);
            return Task::none();
        }

        match self.report_form.update(message) {
            Some(FormEvent::Close) => {
                self.report_open = false;
                log::info!("Report dialog closed");
            }
            Some(FormEvent::Submit(request)) => {
                log::info!("Report requested: {:?}", request);
                self.activity.record(Submission::Report(request));
                self.report_open = false;
            }
            None => {}
        }
        Task::none()
    }
}
