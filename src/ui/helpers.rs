//! Shared rendering utilities.
//!
//! Cursor positioning, centering, and word wrapping used across components.
//! Widths are measured in characters, not bytes.

/// Positions the cursor at a specific row and column (1-indexed).
///
/// # Example
///
/// ```rust
/// use quoteboard::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Returns `(left, right)` padding that centers `text` in `cols` columns.
///
/// Text wider than `cols` gets no padding. Odd remainders go to the right.
#[must_use]
pub fn centered_padding(text: &str, cols: usize) -> (usize, usize) {
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);
    (left, right)
}

/// Greedy word wrap to at most `width` characters per line.
///
/// Words longer than `width` are split across lines. Runs of whitespace,
/// including newlines, collapse to a single space.
///
/// # Example
///
/// ```rust
/// use quoteboard::ui::helpers::wrap_text;
///
/// assert_eq!(wrap_text("to be or not to be", 9), vec!["to be or", "not to be"]);
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut chars: Vec<char> = word.chars().collect();

        while chars.len() > width {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = chars.split_off(width);
            lines.push(chars.into_iter().collect());
            chars = rest;
        }

        let word_len = chars.len();
        if word_len == 0 {
            continue;
        }
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(chars);
        current_len += word_len;
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
