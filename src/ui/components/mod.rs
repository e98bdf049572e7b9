//! Composable UI component renderers.
//!
//! Each component draws one part of the dashboard at a given row and returns
//! the next free row.
//!
//! # Components
//!
//! - [`header`]: title bar with currency and activity indicator
//! - [`summary`]: top gainer and top loser cards
//! - [`search`]: search input box
//! - [`status`]: row counts and last update time
//! - [`table`]: coin table with sortable column headers
//! - [`empty`]: loading and no-results messages
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Summary cards - 4 lines + spacer]   (when available)
//! [Search Bar - 3 lines]               (search mode)
//! [Status line]
//! [Column headers]
//! [Table rows | Empty state]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod status;
mod summary;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use status::render_status;
use summary::render_summary;
use table::{render_table_headers, render_table_rows};

/// Rows always taken by chrome: blank, header, border, status, column
/// headers, footer border, footer.
pub const BASE_CHROME_ROWS: usize = 7;

/// Rows taken by the search box.
pub const SEARCH_BAR_ROWS: usize = 3;

/// Rows taken by the summary cards, spacer included.
pub const SUMMARY_ROWS: usize = 5;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full dashboard for a view model.
pub fn render_dashboard(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    if let Some(cards) = &vm.summary {
        current_row = render_summary(current_row, cards, theme, cols);
    }
    if let Some(search) = &vm.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }
    current_row = render_status(current_row, &vm.status, theme, cols);
    current_row = render_table_headers(current_row, &vm.columns, theme, cols);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
