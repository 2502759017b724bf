//! Footer component renderer.
//!
//! Renders the keybinding hints for the current mode in dimmed text on the
//! bottom row.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer on the given row.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    print!(" {}", pad(&footer.keybindings, cols.saturating_sub(1)));
    print!("{}", Theme::reset());
}
