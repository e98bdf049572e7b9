//! Status line: row counts on the left, last update time on the right.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatusLine;

pub fn render_status(row: usize, status: &StatusLine, theme: &Theme, cols: usize) -> usize {
    let left = status.counts.as_deref().unwrap_or("");
    let right = status.last_updated.as_deref().unwrap_or("");
    let used = 1 + display_width(left) + display_width(right) + 1;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {left}");
    if used <= cols {
        print!("{}", " ".repeat(cols - used));
        print!("{right} ");
    } else {
        print!("{}", " ".repeat(cols.saturating_sub(1 + display_width(left))));
    }
    print!("{}", Theme::reset());
    row + 1
}
