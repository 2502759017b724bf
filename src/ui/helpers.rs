//! Shared rendering utilities.
//!
//! Low-level cursor and text helpers used across the UI components. All
//! width arithmetic operates on character counts, not bytes, so multi-byte
//! names do not shift the layout.

/// Positions the cursor at a specific row and column.
///
/// Uses the ANSI sequence `\x1b[{row};{col}H`. Coordinates are 1-indexed.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the whole screen and homes the cursor.
pub fn clear_screen() {
    print!("\u{1b}[2J\u{1b}[H");
}

/// Pads or truncates `text` to exactly `width` characters.
///
/// Truncation appends `...` when at least four columns are available, so a
/// cut is always visible.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len == width {
        return text.to_string();
    }
    if len < width {
        let mut padded = text.to_string();
        padded.extend(std::iter::repeat(' ').take(width - len));
        return padded;
    }

    if width < 4 {
        return text.chars().take(width).collect();
    }
    let cut: String = text.chars().take(width - 3).collect();
    format!("{cut}...")
}

/// Greedily wraps text into lines of at most `width` characters, breaking on
/// whitespace. A single word longer than `width` is hard-split.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if current.is_empty() {
            if word_len <= width {
                current.push_str(word);
            } else {
                // Hard-split an oversized word across lines.
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > width {
                    lines.push(rest[..width].iter().collect());
                    rest.drain(..width);
                }
                current = rest.into_iter().collect();
            }
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            if word_len <= width {
                current.push_str(word);
            } else {
                let mut rest: Vec<char> = word.chars().collect();
                while rest.len() > width {
                    lines.push(rest[..width].iter().collect());
                    rest.drain(..width);
                }
                current = rest.into_iter().collect();
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_extends_short_text() {
        assert_eq!(pad("ab", 4), "ab  ");
    }

    #[test]
    fn pad_truncates_with_ellipsis() {
        assert_eq!(pad("abcdefgh", 6), "abc...");
    }

    #[test]
    fn wrap_breaks_on_whitespace() {
        let lines = wrap("a concert under the open sky", 10);
        assert_eq!(lines, vec!["a concert", "under the", "open sky"]);
    }

    #[test]
    fn wrap_hard_splits_oversized_words() {
        let lines = wrap("unpronounceable", 6);
        assert_eq!(lines, vec!["unpron", "ouncea", "ble"]);
    }
}
