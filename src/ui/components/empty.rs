//! Empty state and loading indicator renderers.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// Renders a centered empty-state message in the results area.
pub fn render_empty_state(top: usize, body_rows: usize, message: &str, theme: &Theme, cols: usize) {
    let row = top + body_rows / 3;
    let len = message.chars().count();
    let col = cols.saturating_sub(len) / 2 + 1;

    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{message}");
    print!("{}", Theme::reset());
}

/// Renders the loading indicator while a search is in flight.
pub fn render_loading(top: usize, body_rows: usize, theme: &Theme, cols: usize) {
    const MESSAGE: &str = "Loading events...";
    let row = top + body_rows / 3;
    let col = cols.saturating_sub(MESSAGE.len()) / 2 + 1;

    position_cursor(row, col);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_normal));
    print!("{MESSAGE}");
    print!("{}", Theme::reset());
}
