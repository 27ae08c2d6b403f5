//! Full-width alert banners (success notice and fetch error).

use crate::ui::helpers::{centered_padding, position_cursor};
use crate::ui::theme::Theme;

/// Colors for one banner.
pub struct BannerStyle<'a> {
    pub fg: &'a str,
    pub bg: &'a str,
}

/// Renders a one-line banner with a bold headline followed by `message`.
///
/// The text is centered; the background spans the whole width. Returns the
/// next available row.
pub fn render_banner(row: usize, headline: &str, message: &str, style: &BannerStyle<'_>, cols: usize) -> usize {
    let text = if headline.is_empty() {
        message.to_string()
    } else {
        format!("{headline} {message}")
    };
    let text: String = text.chars().take(cols).collect();
    let (left, right) = centered_padding(&text, cols);
    let headline_len = headline.chars().count().min(text.chars().count());

    position_cursor(row, 1);
    print!("{}", Theme::fg(style.fg));
    print!("{}", Theme::bg(style.bg));
    print!("{}", " ".repeat(left));

    let (bold_part, rest): (String, String) = {
        let chars: Vec<char> = text.chars().collect();
        (chars[..headline_len].iter().collect(), chars[headline_len..].iter().collect())
    };
    print!("{}{bold_part}", Theme::bold());
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(style.fg));
    print!("{}", Theme::bg(style.bg));
    print!("{rest}");

    print!("{}", " ".repeat(right));
    print!("{}", Theme::reset());
    row + 1
}
