//! Main application state and iced implementation

use crate::activity::RecentActivity;
use crate::config::{self, Config};
use iced::widget::container;
use iced::{Element, Length, Task, Theme};
use sales_widgets::{
    order_form_modal, report_form_modal, with_modal_overlay, ModalTheme, OrderFormState,
    ReportFormState,
};

use super::message::Message;

/// Main application
pub struct SalesDashboardApp {
    /// Loaded configuration (dialog defaults, theme)
    pub(super) config: Config,
    /// Resolved dialog theme
    pub(super) modal_theme: ModalTheme,
    /// Whether the report dialog is visible
    pub(super) report_open: bool,
    /// Report dialog fields (reset on every open)
    pub(super) report_form: ReportFormState,
    /// Whether the order dialog is visible
    pub(super) order_open: bool,
    /// Order dialog fields (reset on every open)
    pub(super) order_form: OrderFormState,
    /// Submissions made this session
    pub(super) activity: RecentActivity,
}

impl SalesDashboardApp {
    /// Create a new application instance
    pub fn new() -> (Self, Task<Message>) {
        let config_path = config::default_config_path();
        let config = config::load_config(&config_path);
        (Self::with_config(config), Task::none())
    }

    /// Create an application from an already loaded configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            modal_theme: config.theme.modal_theme(),
            report_open: false,
            report_form: ReportFormState::new(&config.defaults.report),
            order_open: false,
            order_form: OrderFormState::new(&config.defaults.order),
            activity: RecentActivity::new(config.recent_activity_limit),
            config,
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenReport => self.handle_open_report(),
            Message::OpenOrder => self.handle_open_order(),
            Message::Report(msg) => self.handle_report_message(msg),
            Message::Order(msg) => self.handle_order_message(msg),
        }
    }

    /// Render the UI
    pub fn view(&self) -> Element<'_, Message> {
        let base: Element<Message> = container(super::dashboard::view(&self.activity))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .into();

        // At most one dialog is open at a time
        let modal = report_form_modal(self.report_open, &self.report_form, &self.modal_theme)
            .map(|modal| modal.map(Message::Report))
            .or_else(|| {
                order_form_modal(self.order_open, &self.order_form, &self.modal_theme)
                    .map(|modal| modal.map(Message::Order))
            });

        with_modal_overlay(base, modal)
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn is_report_open(&self) -> bool {
        self.report_open
    }

    pub fn is_order_open(&self) -> bool {
        self.order_open
    }

    pub fn activity(&self) -> &RecentActivity {
        &self.activity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::Submission;
    use sales_core::{ExportFormat, Priority};
    use sales_widgets::{OrderFormMessage, ReportFormMessage};

    fn app() -> SalesDashboardApp {
        SalesDashboardApp::with_config(Config::default())
    }

    fn send(app: &mut SalesDashboardApp, message: Message) {
        let _ = app.update(message);
    }

    fn fill_report(app: &mut SalesDashboardApp) {
        send(app, Message::Report(ReportFormMessage::StartDateChanged("2026-01-01".into())));
        send(app, Message::Report(ReportFormMessage::EndDateChanged("2026-01-31".into())));
    }

    fn fill_order(app: &mut SalesDashboardApp, quantity: &str) {
        let fields = [
            OrderFormMessage::CustomerChanged("Tailspin Toys".into()),
            OrderFormMessage::ProductChanged("Kite".into()),
            OrderFormMessage::QuantityChanged(quantity.into()),
            OrderFormMessage::UnitPriceChanged("7.25".into()),
            OrderFormMessage::DueDateChanged("2026-11-20".into()),
            OrderFormMessage::SalesRepChanged("M. Ito".into()),
        ];
        for field in fields {
            send(app, Message::Order(field));
        }
    }

    #[test]
    fn test_starts_closed() {
        let app = app();
        assert!(!app.is_report_open());
        assert!(!app.is_order_open());
        assert!(app.activity().is_empty());
        let _ = app.view();
    }

    #[test]
    fn test_backdrop_closes_report() {
        let mut app = app();
        send(&mut app, Message::OpenReport);
        assert!(app.is_report_open());
        let _ = app.view();

        send(&mut app, Message::Report(ReportFormMessage::Backdrop));
        assert!(!app.is_report_open());
        assert!(app.activity().is_empty());
    }

    #[test]
    fn test_report_submit_records_once_and_closes() {
        let mut app = app();
        send(&mut app, Message::OpenReport);
        fill_report(&mut app);
        send(&mut app, Message::Report(ReportFormMessage::Submit));

        assert!(!app.is_report_open());
        assert_eq!(app.activity().len(), 1);
        assert!(matches!(
            app.activity().iter().next(),
            Some(Submission::Report(r)) if r.format == ExportFormat::Pdf
        ));
    }

    #[test]
    fn test_invalid_report_stays_open() {
        let mut app = app();
        send(&mut app, Message::OpenReport);
        send(&mut app, Message::Report(ReportFormMessage::Submit));

        assert!(app.is_report_open());
        assert!(app.activity().is_empty());
        assert_eq!(app.report_form.errors.len(), 2);
    }

    #[test]
    fn test_cancel_closes_invalid_order() {
        let mut app = app();
        send(&mut app, Message::OpenOrder);
        fill_order(&mut app, "-1");
        send(&mut app, Message::Order(OrderFormMessage::Cancel));

        assert!(!app.is_order_open());
        assert!(app.activity().is_empty());
    }

    #[test]
    fn test_order_quantity_bounds() {
        let mut app = app();
        send(&mut app, Message::OpenOrder);
        fill_order(&mut app, "-1");
        send(&mut app, Message::Order(OrderFormMessage::Submit));
        assert!(app.is_order_open());
        assert!(app.activity().is_empty());

        send(&mut app, Message::Order(OrderFormMessage::QuantityChanged("0".into())));
        send(&mut app, Message::Order(OrderFormMessage::Submit));
        assert!(!app.is_order_open());
        assert!(matches!(
            app.activity().iter().next(),
            Some(Submission::Order(o)) if o.quantity == 0 && o.priority == Priority::High
        ));
    }

    #[test]
    fn test_reopen_discards_previous_edits() {
        let mut app = app();
        send(&mut app, Message::OpenOrder);
        send(&mut app, Message::Order(OrderFormMessage::CustomerChanged("Litware".into())));
        send(&mut app, Message::Order(OrderFormMessage::Backdrop));

        send(&mut app, Message::OpenOrder);
        assert!(app.order_form.draft.customer.is_empty());
        assert_eq!(app.order_form.draft.priority, Priority::High);
    }

    #[test]
    fn test_opening_one_dialog_closes_the_other() {
        let mut app = app();
        send(&mut app, Message::OpenReport);
        send(&mut app, Message::OpenOrder);
        assert!(!app.is_report_open());
        assert!(app.is_order_open());
    }

    #[test]
    fn test_messages_for_closed_dialog_ignored() {
        let mut app = app();
        fill_report(&mut app);
        send(&mut app, Message::Report(ReportFormMessage::Submit));
        assert!(app.activity().is_empty());
    }

    #[test]
    fn test_huge_activity_limit_starts() {
        let config: Config =
            serde_yaml::from_str("recent_activity_limit: 18446744073709551615").unwrap();
        let mut app = SalesDashboardApp::with_config(config);
        send(&mut app, Message::OpenReport);
        fill_report(&mut app);
        send(&mut app, Message::Report(ReportFormMessage::Submit));
        assert_eq!(app.activity().len(), 1);
    }

    #[test]
    fn test_configured_defaults_seed_forms() {
        let mut config = Config::default();
        config.defaults.report.format = ExportFormat::Csv;
        let mut app = SalesDashboardApp::with_config(config);

        send(&mut app, Message::OpenReport);
        assert_eq!(app.report_form.draft.format, ExportFormat::Csv);
    }
}
