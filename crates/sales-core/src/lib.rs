//! Sales Core - Shared request types for the sales dashboard dialogs
//!
//! Holds the values collected by the report and order dialogs, and the
//! field constraints (`required`, `min`, `step`) a form must pass before
//! its request is handed to the caller.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::{Field, FieldError, ValidationErrors};
