//! Filter bar component renderer.
//!
//! Renders the committed search filters in a bordered bar below the header.
//! While a field is being edited the border switches to the accent color and
//! the live buffer is shown with a cursor marker.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EditingField, FilterBarInfo};

/// Renders the three-row filter bar and returns the next available row.
///
/// Layout:
///
/// ```text
/// ┌──────────────────────────────────────────────┐
/// │ keyword: jazz_  date: 2026-09-01  category: Music  sort: date │
/// └──────────────────────────────────────────────┘
/// ```
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    let border_color = if bar.editing.is_some() {
        &theme.colors.filter_bar_border
    } else {
        &theme.colors.border
    };

    let inner_width = cols.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", Theme::fg(border_color));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));

    position_cursor(row + 1, 1);
    print!("\u{2502}");
    print!("{}", Theme::reset());

    let keyword = field_text(&bar.keyword, bar.editing == Some(EditingField::Keyword));
    let date = field_text(&bar.date, bar.editing == Some(EditingField::Date));
    let content = format!(
        " keyword: {keyword}  date: {date}  category: {}  sort: {} ",
        bar.category, bar.sort
    );

    let shown: String = content.chars().take(inner_width).collect();
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!(
        "{}",
        " ".repeat(inner_width.saturating_sub(shown.chars().count()))
    );
    print!("{}", Theme::fg(border_color));
    print!("\u{2502}");

    position_cursor(row + 2, 1);
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Shows the value, a placeholder dash when unset, or the live buffer with a
/// trailing cursor marker while editing.
fn field_text(value: &str, editing: bool) -> String {
    if editing {
        format!("{value}_")
    } else if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
