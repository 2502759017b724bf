//! Toast notification renderer.
//!
//! Draws the active toast right-aligned one row above the footer, colored by
//! severity. Toasts never stack; the view model carries at most one.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ToastInfo;

/// Renders the toast at the given row, right-aligned.
pub fn render_toast(row: usize, toast: &ToastInfo, theme: &Theme, cols: usize) {
    let text = format!(" {} ", toast.message);
    let len = text.chars().count();
    let col = cols.saturating_sub(len + 1).max(1);

    position_cursor(row, col);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.selection_fg));
    print!("{}", Theme::bg(theme.toast_color(toast.severity)));
    print!("{text}");
    print!("{}", Theme::reset());
}
