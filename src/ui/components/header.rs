//! Header component renderer.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next row.
///
/// The title is centered. The selected currency sits at the right edge, with
/// the activity indicator (if any) just before it.
///
/// ```text
/// [padding] Coinpane · Top 50 by market cap [padding] ↻ Refreshing…  EUR
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let right = header.activity.as_ref().map_or_else(
        || format!("{} ", header.currency),
        |activity| format!("{activity}  {} ", header.currency),
    );
    let title_len = display_width(&header.title);
    let right_len = display_width(&right);
    let padding = cols.saturating_sub(title_len) / 2;
    let gap = cols.saturating_sub(padding + title_len + right_len);

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    print!("{}", " ".repeat(gap));
    if padding + title_len + right_len <= cols {
        print!("{right}");
    }

    print!("{}", Theme::reset());
    row + 1
}
