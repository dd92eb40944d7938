//! Order Form Widget
//!
//! Dialog for entering a new sales order. Seven required fields; quantity
//! must be a whole number >= 0 and unit price a non-negative amount in cents.

mod message;
mod view;

pub use message::OrderFormMessage;
pub use view::{order_form_modal, order_form_view};

use sales_core::{Field, OrderDraft, OrderRequest, ValidationErrors};

use crate::form::{finish_submit, FormEvent};
use crate::modal::ModalHeader;

/// State for an open order form
#[derive(Debug, Clone, Default)]
pub struct OrderFormState {
    /// Current field values
    pub draft: OrderDraft,
    /// Errors from the last blocked submit
    pub errors: ValidationErrors,
}

impl OrderFormState {
    pub const TITLE: &'static str = "Create New Sales Order";
    pub const SUBTITLE: &'static str = "Enter the details for the new sales order";
    pub const SUBMIT_LABEL: &'static str = "Create Order";

    /// Seed a form from defaults
    pub fn new(defaults: &OrderDraft) -> Self {
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
    pub fn update(&mut self, message: OrderFormMessage) -> Option<FormEvent<OrderRequest>> {
        match message {
            OrderFormMessage::CustomerChanged(value) => {
                self.draft.customer = value;
                self.errors.clear(Field::Customer);
            }
            OrderFormMessage::ProductChanged(value) => {
                self.draft.product = value;
                self.errors.clear(Field::Product);
            }
            OrderFormMessage::QuantityChanged(value) => {
                self.draft.quantity = value;
                self.errors.clear(Field::Quantity);
            }
            OrderFormMessage::UnitPriceChanged(value) => {
                self.draft.unit_price = value;
                self.errors.clear(Field::UnitPrice);
            }
            OrderFormMessage::DueDateChanged(value) => {
                self.draft.due_date = value;
                self.errors.clear(Field::DueDate);
            }
            OrderFormMessage::SalesRepChanged(value) => {
                self.draft.sales_rep = value;
                self.errors.clear(Field::SalesRep);
            }
            OrderFormMessage::SelectPriority(priority) => {
                self.draft.priority = priority;
            }
            OrderFormMessage::Submit => {
                return finish_submit(self.draft.validate(), &mut self.errors, "Order form");
            }
            OrderFormMessage::Cancel | OrderFormMessage::Backdrop => {
                return Some(FormEvent::Close);
            }
        }
        None
    }
}
