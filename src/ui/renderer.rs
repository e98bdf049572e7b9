//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_dashboard → ANSI Output
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout.
///
/// Prints ANSI-styled output with absolute cursor positioning. Does not clear
/// the screen; Zellij hands the plugin a fresh frame on every render.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);
    tracing::trace!(
        row_count = viewmodel.display_items.len(),
        has_summary = viewmodel.summary.is_some(),
        "rendering dashboard"
    );

    components::render_dashboard(&viewmodel, &state.theme, cols, rows);
}
