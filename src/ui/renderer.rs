//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point: it computes the view
//! model from application state and delegates to the component renderers in
//! z-order, with the toast and detail overlay painted last so they sit on
//! top of the frame.

use crate::app::state::SAVED_PANEL_COLS;
use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::clear_screen;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UiViewModel;
use crate::app::modes::ViewMode;
use std::io::Write;

/// Renders one full frame to stdout.
///
/// Repaints the whole screen; there is no damage tracking. The main loop
/// only calls this when the event handler reported a visible change.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UiViewModel, theme: &Theme, rows: usize, cols: usize) {
    clear_screen();

    let results_cols = cols.saturating_sub(SAVED_PANEL_COLS);

    let mut row = components::render_header(1, &vm.header, theme, cols);
    row = components::render_filter_bar(row, &vm.filter_bar, theme, results_cols);

    let body_top = row;
    let body_rows = rows.saturating_sub(body_top + 1);

    if let Some(message) = &vm.empty_state {
        components::render_empty_state(body_top, body_rows, message, theme, results_cols);
    } else if vm.loading && vm.cards.is_empty() {
        components::render_loading(body_top, body_rows, theme, results_cols);
    } else {
        match vm.view_mode {
            ViewMode::Grid => {
                components::render_grid(body_top, body_rows, &vm.cards, theme, results_cols);
            }
            ViewMode::List => {
                components::render_list(body_top, body_rows, &vm.cards, theme, results_cols);
            }
        }
    }

    components::render_saved_panel(
        body_top,
        body_rows,
        &vm.saved_items,
        vm.saved_focused,
        theme,
        results_cols + 1,
        SAVED_PANEL_COLS,
    );

    components::render_footer(rows, &vm.footer, theme, cols);

    if let Some(toast) = &vm.toast {
        components::render_toast(rows.saturating_sub(1), toast, theme, cols);
    }
    if let Some(overlay) = &vm.overlay {
        components::render_overlay(overlay, theme, rows, cols);
    }

    let _ = std::io::stdout().flush();
}
