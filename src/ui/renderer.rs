//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process: compute the view model from `AppState`,
//! then hand it to the component layout.

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with `print!`; Zellij captures stdout as the
/// pane contents.
///
/// # Example
///
/// ```rust
/// use quoteboard::app::{AppState, ManualClock};
/// use quoteboard::ui::render;
/// use quoteboard::Theme;
///
/// let state = AppState::new("https://example.test/quote", Theme::default(), Box::new(ManualClock::default()));
/// render(&state, 24, 80);
/// ```
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    components::render_layout(&viewmodel, &state.theme, cols, rows);
}
