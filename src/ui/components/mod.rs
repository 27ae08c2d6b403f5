//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`banner`]: Success notice and error alert
//! - [`spinner`]: Loading indicator
//! - [`quote`]: Quote panel
//! - [`footer`]: Keybinding hints and refresh availability
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Success banner, only while the notice is visible]
//! [blank line]
//! [Status area: spinner | error banner | quote | nothing]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```

mod banner;
mod footer;
mod header;
mod quote;
mod spinner;

use crate::ui::helpers::position_cursor;
use crate::ui::status::StatusView;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use banner::{render_banner, BannerStyle};
use footer::render_footer;
use header::render_header;
use quote::render_quote;
use spinner::render_spinner;

/// Indentation of the quote panel.
const CONTENT_MARGIN: usize = 2;

/// Renders a horizontal border at `row`. Returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the whole pane.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    let bottom_border_row = footer_row.saturating_sub(1).max(1);
    let last_content_row = bottom_border_row.saturating_sub(1);

    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)
    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(notice) = &vm.notice {
        let style = BannerStyle {
            fg: &theme.colors.success_fg,
            bg: &theme.colors.success_bg,
        };
        current_row = render_banner(current_row, &notice.headline, &notice.message, &style, cols);
    }
    current_row += 1;

    if current_row <= last_content_row {
        match &vm.status {
            StatusView::Spinner(spinner) => {
                render_spinner(current_row, spinner, theme, cols);
            }
            StatusView::Error(error) => {
                let style = BannerStyle {
                    fg: &theme.colors.error_fg,
                    bg: &theme.colors.error_bg,
                };
                render_banner(current_row, &error.headline, &error.message, &style, cols);
            }
            StatusView::Content(card) => {
                render_quote(current_row, card, theme, CONTENT_MARGIN, last_content_row);
            }
            StatusView::Nothing => {}
        }
    }

    render_border(bottom_border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
