//! Sales Dashboard - host application for the report and order dialogs
//!
//! The dashboard owns one visibility flag per dialog and the transient form
//! state behind it. Submitted requests are logged and listed under recent
//! activity; generating reports and persisting orders happens elsewhere.

pub mod activity;
pub mod config;
pub mod ui;
