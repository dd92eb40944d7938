//! Building blocks shared by the dialog forms

use iced::widget::{button, column, row, text, text_input, Space};
use iced::{Element, Length};
use sales_core::{Field, FieldError, ValidationErrors};

use crate::button_styles;
use crate::theme::{ModalTheme, ERROR_TEXT};

/// Placeholder shown in empty date inputs
pub const DATE_PLACEHOLDER: &str = "yyyy-mm-dd";

/// What the host has to do after a form handled a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent<R> {
    /// Dismiss the dialog (cancel button or backdrop click)
    Close,
    /// All constraints passed; the request replaces the draft
    Submit(R),
}

/// Record the outcome of a submit attempt
///
/// On failure the errors are kept for display and the first invalid field
/// is logged; nothing is emitted.
pub(crate) fn finish_submit<R>(
    result: Result<R, ValidationErrors>,
    errors: &mut ValidationErrors,
    form: &str,
) -> Option<FormEvent<R>> {
    match result {
        Ok(request) => {
            errors.clear_all();
            Some(FormEvent::Submit(request))
        }
        Err(found) => {
            if let Some((field, error)) = found.first() {
                log::debug!("{} submit blocked: {}: {}", form, field, error);
            }
            *errors = found;
            None
        }
    }
}

/// Label above an input, with the field's validation message below it
///
/// Pick lists always hold a choice and pass `None`.
pub fn labeled<'a, Message: 'a>(
    field: Field,
    input: impl Into<Element<'a, Message>>,
    error: Option<&FieldError>,
) -> Element<'a, Message> {
    let mut group = column![text(field.label()).size(14), input.into()].spacing(4);
    if let Some(error) = error {
        group = group.push(text(error.to_string()).size(12).color(ERROR_TEXT));
    }
    group.into()
}

/// Single-line text input that submits the form on Enter
pub fn text_field<'a, Message: Clone + 'a>(
    field: Field,
    placeholder: &str,
    value: &str,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Message,
    errors: &ValidationErrors,
) -> Element<'a, Message> {
    let input = text_input(placeholder, value)
        .on_input(on_input)
        .on_submit(on_submit)
        .padding(8)
        .width(Length::Fill);

    labeled(field, input, errors.get(field))
}

/// Cancel and confirm buttons, right aligned
pub fn form_actions<'a, Message: Clone + 'a>(
    on_cancel: Message,
    on_submit: Message,
    submit_label: &'a str,
    theme: &ModalTheme,
) -> Element<'a, Message> {
    let primary = theme.primary;

    let cancel_btn = button(text("Cancel"))
        .on_press(on_cancel)
        .padding([8, 16])
        .style(button_styles::light_style);

    let submit_btn = button(text(submit_label))
        .on_press(on_submit)
        .padding([8, 16])
        .style(move |theme, status| button_styles::primary_style(theme, status, primary));

    row![Space::new().width(Length::Fill), cancel_btn, submit_btn]
        .spacing(10)
        .width(Length::Fill)
        .into()
}
