//! View functions for the report form

use iced::widget::{column, pick_list, text_input};
use iced::{Element, Length};
use sales_core::{ExportFormat, Field, ReportType};

use super::message::ReportFormMessage;
use super::ReportFormState;
use crate::form::{form_actions, labeled, DATE_PLACEHOLDER};
use crate::modal::modal_shell;
use crate::theme::ModalTheme;

/// Render the complete report dialog, or nothing when closed
pub fn report_form_modal<'a>(
    open: bool,
    state: &'a ReportFormState,
    theme: &ModalTheme,
) -> Option<Element<'a, ReportFormMessage>> {
    modal_shell(
        open,
        &ReportFormState::header(),
        || report_form_view(state, theme),
        ReportFormMessage::Backdrop,
        theme,
    )
}

/// Render the report form body (fields and actions)
pub fn report_form_view<'a>(
    state: &'a ReportFormState,
    theme: &ModalTheme,
) -> Element<'a, ReportFormMessage> {
    let draft = &state.draft;
    let errors = &state.errors;

    let report_type = labeled(
        Field::ReportType,
        pick_list(
            ReportType::ALL,
            Some(draft.report_type),
            ReportFormMessage::SelectReportType,
        )
        .width(Length::Fill),
        None,
    );

    let start_date = labeled(
        Field::StartDate,
        date_input(&draft.start_date, ReportFormMessage::StartDateChanged),
        errors.get(Field::StartDate),
    );

    let end_date = labeled(
        Field::EndDate,
        date_input(&draft.end_date, ReportFormMessage::EndDateChanged),
        errors.get(Field::EndDate),
    );

    let format = labeled(
        Field::Format,
        pick_list(
            ExportFormat::ALL,
            Some(draft.format),
            ReportFormMessage::SelectFormat,
        )
        .width(Length::Fill),
        None,
    );

    let actions = form_actions(
        ReportFormMessage::Cancel,
        ReportFormMessage::Submit,
        ReportFormState::SUBMIT_LABEL,
        theme,
    );

    column![report_type, start_date, end_date, format, actions]
        .spacing(15)
        .into()
}

fn date_input<'a>(
    value: &str,
    on_input: fn(String) -> ReportFormMessage,
) -> Element<'a, ReportFormMessage> {
    text_input(DATE_PLACEHOLDER, value)
        .on_input(on_input)
        .on_submit(ReportFormMessage::Submit)
        .padding(8)
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_form_renders_nothing() {
        let state = ReportFormState::default();
        assert!(report_form_modal(false, &state, &ModalTheme::default()).is_none());
    }

    #[test]
    fn test_click_inside_panel_does_not_close() -> Result<(), iced_test::Error> {
        let state = ReportFormState::default();
        let theme = ModalTheme::default();
        let Some(modal) = report_form_modal(true, &state, &theme) else {
            panic!("expected open dialog");
        };

        let mut ui = iced_test::simulator(modal);
        let _ = ui.click("Report Type *")?;
        let _ = ui.click("Cancel")?;

        let messages: Vec<ReportFormMessage> = ui.into_messages().collect();
        assert!(messages.contains(&ReportFormMessage::Cancel));
        assert!(!messages.contains(&ReportFormMessage::Backdrop));
        Ok(())
    }
}
