//! Table component renderer.
//!
//! Four columns: ASSET (name and symbol), PRICE, MARKET CAP, and 24H %. The
//! numeric columns have fixed widths and are right-aligned; ASSET takes the
//! remaining width.

use crate::ui::helpers::{self, display_width, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Align, ColumnHeader, DisplayItem};

const LEFT_MARGIN: usize = 1;
const COLUMN_GAP: usize = 2;
const PRICE_WIDTH: usize = 16;
const MARKET_CAP_WIDTH: usize = 24;
const CHANGE_WIDTH: usize = 9;
const MIN_ASSET_WIDTH: usize = 12;

/// Width left for the ASSET column on a terminal `cols` wide.
fn asset_width(cols: usize) -> usize {
    let fixed = LEFT_MARGIN + PRICE_WIDTH + MARKET_CAP_WIDTH + CHANGE_WIDTH + COLUMN_GAP * 3;
    cols.saturating_sub(fixed).max(MIN_ASSET_WIDTH)
}

fn column_widths(cols: usize) -> [usize; 4] {
    [asset_width(cols), PRICE_WIDTH, MARKET_CAP_WIDTH, CHANGE_WIDTH]
}

/// Renders the column headers with sort indicators at `row`.
///
/// The active column's label and arrow use the sort indicator color.
pub fn render_table_headers(row: usize, columns: &[ColumnHeader], theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(LEFT_MARGIN));

    for (i, (column, width)) in columns.iter().zip(column_widths(cols)).enumerate() {
        if i > 0 {
            print!("{}", " ".repeat(COLUMN_GAP));
        }
        let label = format!("{} {}", column.label, column.indicator);
        let color = if column.is_active {
            &theme.colors.sort_indicator_fg
        } else {
            &theme.colors.header_fg
        };
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(color));
        print!("{}", fit(&label, width, column.align == Align::Right));
        print!("{}", Theme::reset());
    }

    row + 1
}

/// Renders all table rows starting at `row` and returns the row after them.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one coin row.
///
/// # Styling Precedence
///
/// 1. Selection colors across the full row (if `is_selected`)
/// 2. Search match highlights in the name (unless selected)
/// 3. Trend color on the 24h change, dim symbol, normal text elsewhere
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    let [asset_w, price_w, cap_w, change_w] = column_widths(cols);
    let base = || {
        if item.is_selected {
            format!(
                "{}{}",
                Theme::fg(&theme.colors.selection_fg),
                Theme::bg(&theme.colors.selection_bg)
            )
        } else {
            Theme::fg(&theme.colors.text_normal)
        }
    };

    position_cursor(row, 1);
    print!("{}", base());
    print!("{}", " ".repeat(LEFT_MARGIN));

    let symbol_len = display_width(&item.symbol);
    let name = truncate(&item.name, asset_w.saturating_sub(symbol_len + 1));
    helpers::render_highlighted_text(&name, &item.highlight_ranges, theme, item.is_selected);
    print!(" ");
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", item.symbol);
    print!("{}", base());
    let asset_len = display_width(&name) + 1 + symbol_len;
    print!("{}", " ".repeat(asset_w.saturating_sub(asset_len)));

    print!("{}", " ".repeat(COLUMN_GAP));
    print!("{}", fit(&item.price, price_w, true));
    print!("{}", " ".repeat(COLUMN_GAP));
    print!("{}", fit(&item.market_cap, cap_w, true));
    print!("{}", " ".repeat(COLUMN_GAP));
    if !item.is_selected {
        print!("{}", Theme::fg(theme.trend_color(item.trend)));
    }
    print!("{}", fit(&item.change, change_w, true));
    print!("{}", base());

    let line_len = LEFT_MARGIN + asset_w.max(asset_len) + price_w + cap_w + change_w + COLUMN_GAP * 3;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_column_takes_remaining_width_with_a_floor() {
        assert_eq!(asset_width(100), 100 - 56);
        assert_eq!(asset_width(40), MIN_ASSET_WIDTH);
    }
}
