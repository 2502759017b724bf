//! Result card renderers for the grid and list layouts.
//!
//! Both layouts consume the same pre-formatted [`EventCard`] window; the
//! grid arranges cards two abreast, the list draws one row per event. The
//! saved marker `*` is drawn in the theme's indicator color, and selection
//! inverts the name line (grid) or the whole row (list).

use crate::ui::helpers::{pad, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EventCard;

/// Rows one grid card occupies, including its trailing blank line.
const CARD_ROWS: usize = 5;

/// Renders the card window as a two-column grid.
///
/// Cards fill left-to-right, top-to-bottom. Cards that do not fit in
/// `body_rows` are clipped; the windowing in the view model keeps the
/// selection visible.
pub fn render_grid(
    top: usize,
    body_rows: usize,
    cards: &[EventCard],
    theme: &Theme,
    cols: usize,
) {
    let column_width = (cols / 2).saturating_sub(2);

    for (idx, card) in cards.iter().enumerate() {
        let row = top + (idx / 2) * CARD_ROWS;
        if row + CARD_ROWS > top + body_rows {
            break;
        }
        let col = 2 + (idx % 2) * (column_width + 2);
        render_card(row, col, column_width, card, theme);
    }
}

/// Renders one grid card at the given position.
fn render_card(row: usize, col: usize, width: usize, card: &EventCard, theme: &Theme) {
    position_cursor(row, col);
    if card.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", pad(&card.name, width.saturating_sub(2)));
    print!("{}", Theme::reset());
    print_marker(card, theme);

    position_cursor(row + 1, col);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", pad(&format!("{}  {}", card.date, card.time), width));

    position_cursor(row + 2, col);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", pad(&card.venue, width));

    position_cursor(row + 3, col);
    print!("{}", pad(&format!("{}  {}", card.category, card.price), width));
    print!("{}", Theme::reset());
}

/// Renders the card window as single-line rows.
pub fn render_list(
    top: usize,
    body_rows: usize,
    cards: &[EventCard],
    theme: &Theme,
    cols: usize,
) {
    // Fixed columns for date and price, the name takes the rest.
    const DATE_WIDTH: usize = 18;
    const PRICE_WIDTH: usize = 18;
    let name_width = cols.saturating_sub(DATE_WIDTH + PRICE_WIDTH + 8);

    for (idx, card) in cards.iter().take(body_rows).enumerate() {
        let row = top + idx;
        position_cursor(row, 1);

        if card.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }

        print!(" ");
        print!("{}", pad(&card.name, name_width));
        print!("  {}", pad(&card.date, DATE_WIDTH));
        print!("  {}", pad(&card.price, PRICE_WIDTH));
        print!("{}", Theme::reset());
        print_marker(card, theme);
    }
}

fn print_marker(card: &EventCard, theme: &Theme) {
    if card.is_saved {
        print!("{}*{}", Theme::fg(&theme.colors.saved_indicator_fg), Theme::reset());
    } else {
        print!(" ");
    }
}
