//! View functions for the order form

use iced::widget::{column, pick_list, row};
use iced::{Element, Length};
use sales_core::{Field, Priority};

use super::message::OrderFormMessage;
use super::OrderFormState;
use crate::form::{form_actions, labeled, text_field, DATE_PLACEHOLDER};
use crate::modal::modal_shell;
use crate::theme::ModalTheme;

/// Render the complete order dialog, or nothing when closed
pub fn order_form_modal<'a>(
    open: bool,
    state: &'a OrderFormState,
    theme: &ModalTheme,
) -> Option<Element<'a, OrderFormMessage>> {
    modal_shell(
        open,
        &OrderFormState::header(),
        || order_form_view(state, theme),
        OrderFormMessage::Backdrop,
        theme,
    )
}

/// Render the order form body (fields and actions)
///
/// Quantity and unit price share a row; everything else is one field per row.
pub fn order_form_view<'a>(
    state: &'a OrderFormState,
    theme: &ModalTheme,
) -> Element<'a, OrderFormMessage> {
    let draft = &state.draft;
    let errors = &state.errors;
    let submit = OrderFormMessage::Submit;

    let customer = text_field(
        Field::Customer,
        "Enter customer name",
        &draft.customer,
        OrderFormMessage::CustomerChanged,
        submit.clone(),
        errors,
    );
    let product = text_field(
        Field::Product,
        "Enter product name",
        &draft.product,
        OrderFormMessage::ProductChanged,
        submit.clone(),
        errors,
    );
    let quantity = text_field(
        Field::Quantity,
        "Enter quantity",
        &draft.quantity,
        OrderFormMessage::QuantityChanged,
        submit.clone(),
        errors,
    );
    let unit_price = text_field(
        Field::UnitPrice,
        "Enter unit price",
        &draft.unit_price,
        OrderFormMessage::UnitPriceChanged,
        submit.clone(),
        errors,
    );
    let due_date = text_field(
        Field::DueDate,
        DATE_PLACEHOLDER,
        &draft.due_date,
        OrderFormMessage::DueDateChanged,
        submit.clone(),
        errors,
    );
    let sales_rep = text_field(
        Field::SalesRep,
        "Enter sales rep name",
        &draft.sales_rep,
        OrderFormMessage::SalesRepChanged,
        submit,
        errors,
    );

    let priority = labeled(
        Field::Priority,
        pick_list(Priority::ALL, Some(draft.priority), OrderFormMessage::SelectPriority)
            .width(Length::Fill),
        None,
    );

    let amounts = row![quantity, unit_price].spacing(12);

    let actions = form_actions(
        OrderFormMessage::Cancel,
        OrderFormMessage::Submit,
        OrderFormState::SUBMIT_LABEL,
        theme,
    );

    column![customer, product, amounts, due_date, sales_rep, priority, actions]
        .spacing(15)
        .into()
}
