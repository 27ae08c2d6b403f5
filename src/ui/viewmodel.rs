//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed
//! by the renderer. They carry display-ready data only: wrapped lines,
//! resolved messages, and whether the refresh control is enabled.

use super::status::StatusView;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Header information.
    pub header: HeaderInfo,

    /// Success banner, present while the transient notice is visible.
    pub notice: Option<NoticeInfo>,

    /// What the status area shows.
    pub status: StatusView,

    /// Footer information (keybindings and refresh availability).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Success banner display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    pub headline: String,
    pub message: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,

    /// `false` while a fetch is outstanding; the footer is drawn dimmed.
    pub refresh_enabled: bool,
}
