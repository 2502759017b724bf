//! Detail overlay renderer.
//!
//! Draws a centered modal box over the current frame with the full event
//! detail. The frame beneath is not cleared; the box paints its own interior
//! so it fully covers what it overlaps.

use crate::ui::helpers::{pad, position_cursor, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayInfo;

/// Maximum overlay width in columns, borders included.
const MAX_WIDTH: usize = 72;

/// Renders the detail overlay centered in the terminal.
pub fn render_overlay(overlay: &OverlayInfo, theme: &Theme, rows: usize, cols: usize) {
    let width = MAX_WIDTH.min(cols.saturating_sub(4)).max(20);
    let inner = width - 4;

    let mut lines: Vec<(String, bool)> = Vec::new();
    for line in wrap(&overlay.title, inner) {
        lines.push((line, true));
    }
    lines.push((String::new(), false));
    lines.push((format!("{}  {}", overlay.date, overlay.time), false));
    lines.push((format!("Venue: {}", overlay.venue), false));
    lines.push((format!("Category: {}", overlay.category), false));
    lines.push((format!("Price: {}", overlay.price), false));
    lines.push((String::new(), false));
    for line in wrap(&overlay.description, inner) {
        lines.push((line, false));
    }
    lines.push((String::new(), false));
    for line in wrap(&overlay.url, inner) {
        lines.push((line, false));
    }
    if !overlay.image.is_empty() {
        for line in wrap(&overlay.image, inner) {
            lines.push((line, false));
        }
    }

    let max_body = rows.saturating_sub(6);
    lines.truncate(max_body);

    let height = lines.len() + 2;
    let top = rows.saturating_sub(height) / 2 + 1;
    let left = cols.saturating_sub(width) / 2 + 1;

    position_cursor(top, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(width - 2));

    for (offset, (line, is_title)) in lines.iter().enumerate() {
        position_cursor(top + 1 + offset, left);
        print!("{}\u{2502}{} ", Theme::fg(&theme.colors.overlay_border), Theme::reset());

        if *is_title {
            print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.text_normal));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", pad(line, inner));
        print!("{}", Theme::reset());

        print!(" {}\u{2502}{}", Theme::fg(&theme.colors.overlay_border), Theme::reset());
    }

    position_cursor(top + height - 1, left);
    print!("{}", Theme::fg(&theme.colors.overlay_border));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(width - 2));
    print!("{}", Theme::reset());
}
