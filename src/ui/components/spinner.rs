//! Loading indicator.

use crate::ui::helpers::{centered_padding, position_cursor};
use crate::ui::status::SpinnerInfo;
use crate::ui::theme::Theme;

const GLYPH: &str = "⠿";

/// Renders the centered loading label at `row`. Returns the next row.
pub fn render_spinner(row: usize, spinner: &SpinnerInfo, theme: &Theme, cols: usize) -> usize {
    let text = format!("{GLYPH} {}", spinner.label);
    let (left, right) = centered_padding(&text, cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.spinner_fg));
    print!("{}", " ".repeat(left));
    print!("{text}");
    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
    row + 1
}
