//! Quote panel renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::status::QuoteCard;
use crate::ui::theme::Theme;

/// Renders the quote title and its wrapped body starting at `row`, indented
/// by `margin` columns, never drawing past `last_row`.
///
/// Layout:
///
/// ```text
///   Title
///
///   “ body line one
///     body line two ”
/// ```
///
/// Returns the next available row.
pub fn render_quote(row: usize, card: &QuoteCard, theme: &Theme, margin: usize, last_row: usize) -> usize {
    let mut current = row;
    let indent = " ".repeat(margin);

    if !card.title.is_empty() && current <= last_row {
        position_cursor(current, 1);
        print!("{indent}{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.quote_title_fg));
        print!("{}", card.title);
        print!("{}", Theme::reset());
        current += 2;
    }

    let count = card.lines.len();
    for (index, line) in card.lines.iter().enumerate() {
        if current > last_row {
            break;
        }
        let open = if index == 0 { "“ " } else { "  " };
        let close = if index + 1 == count { " ”" } else { "" };

        position_cursor(current, 1);
        print!("{indent}{}", Theme::italic());
        print!("{}", Theme::fg(&theme.colors.quote_body_fg));
        print!("{open}{line}{close}");
        print!("{}", Theme::reset());
        current += 1;
    }

    current
}
