//! Shared UI widgets for the sales dashboard
//!
//! This crate provides the modal shell and the two form dialogs shown on top
//! of the dashboard.
//!
//! ## Architecture (iced 0.14 patterns)
//!
//! - **State structs**: Owned draft values plus the latest validation result
//!   (`ReportFormState`, `OrderFormState`)
//! - **Messages**: One enum per form; `update()` returns a `FormEvent` when the
//!   host has to act (close the dialog or take the submitted request)
//! - **View functions**: Take state + theme, return `Element<Message>`; the host
//!   maps them into its own message type with `Element::map`
//!
//! ## View Functions
//!
//! - `modal_shell`: Backdrop + centered panel, or nothing when closed
//! - `with_modal_overlay`: Stack an optional modal above base content
//! - `report_form_modal` / `order_form_modal`: The complete dialogs

pub mod button_styles;
pub mod form;
pub mod modal;
pub mod order_form;
pub mod report_form;
pub mod theme;

pub use form::FormEvent;
pub use modal::{modal_shell, with_modal_overlay, ModalHeader};
pub use order_form::{order_form_modal, order_form_view, OrderFormMessage, OrderFormState};
pub use report_form::{report_form_modal, report_form_view, ReportFormMessage, ReportFormState};
pub use theme::{parse_hex_color, ModalTheme};
