//! Modal shell
//!
//! Provides the reusable pieces every dashboard dialog is built from:
//! - `modal_shell()` - Backdrop + centered panel, or nothing when closed
//! - `with_modal_overlay()` - Stacks an optional modal above the base view
//! - `ModalHeader` - Title and optional subtitle shown at the top of the panel

mod overlay;
mod panel;

pub use overlay::{build_backdrop, modal_shell, with_modal_overlay};
pub use panel::modal_panel;

/// Title and optional subtitle of a modal panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalHeader {
    pub title: String,
    pub subtitle: Option<String>,
}

impl ModalHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Subtitle to render; empty subtitles are omitted like missing ones
    pub fn visible_subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }
}
