//! Saved-events side panel renderer.
//!
//! The panel occupies a fixed-width column on the right edge of the screen,
//! separated from the results by a vertical border. Each entry takes two
//! rows: the name and a dimmed date line.

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SavedItem;

/// Renders the saved panel into the column starting at `left`.
pub fn render_saved_panel(
    top: usize,
    body_rows: usize,
    items: &[SavedItem],
    focused: bool,
    theme: &Theme,
    left: usize,
    width: usize,
) {
    for offset in 0..body_rows {
        position_cursor(top + offset, left);
        print!("{}\u{2502}{}", Theme::fg(&theme.colors.border), Theme::reset());
    }

    position_cursor(top, left + 2);
    if focused {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.filter_bar_border));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("Saved ({})", items.len());
    print!("{}", Theme::reset());

    if items.is_empty() {
        position_cursor(top + 2, left + 2);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("No saved events yet");
        print!("{}", Theme::reset());
        return;
    }

    let item_width = width.saturating_sub(4);
    for (idx, item) in items.iter().enumerate() {
        let row = top + 2 + idx * 2;
        if row + 1 >= top + body_rows {
            break;
        }

        position_cursor(row, left + 2);
        if item.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", pad(&item.name, item_width));
        print!("{}", Theme::reset());

        position_cursor(row + 1, left + 2);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", pad(&item.date, item_width));
        print!("{}", Theme::reset());
    }
}
