//! Top gainer / top loser cards.

use crate::ui::helpers::{display_width, fit, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SummaryCard, SummaryCards};

const CARD_MARGIN: usize = 1;
const CARD_GAP: usize = 2;

/// Renders the two cards side by side at `row` and returns the row after
/// them, including one blank spacer line.
///
/// ```text
/// ┌ Top gainer (24h) ─────────┐  ┌ Top loser (24h) ──────────┐
/// │ Solana SOL       € 140,25 │  │ Dogecoin DOGE    € 0,1204 │
/// │                   +4.10%  │  │                   -3.20%  │
/// └───────────────────────────┘  └───────────────────────────┘
/// ```
pub fn render_summary(row: usize, cards: &SummaryCards, theme: &Theme, cols: usize) -> usize {
    let card_width = cols.saturating_sub(CARD_MARGIN * 2 + CARD_GAP) / 2;
    let second_col = 1 + CARD_MARGIN + card_width + CARD_GAP;

    render_card(row, 1 + CARD_MARGIN, card_width, &cards.gainer, theme);
    render_card(row, second_col, card_width, &cards.loser, theme);

    row + super::SUMMARY_ROWS
}

fn render_card(row: usize, col: usize, width: usize, card: &SummaryCard, theme: &Theme) {
    let inner = width.saturating_sub(2);
    let trend = theme.trend_color(card.trend);

    let title = truncate(&format!(" {} ", card.title), inner.saturating_sub(1));
    position_cursor(row, col);
    print!("{}", Theme::fg(&theme.colors.border));
    print!("┌─");
    print!("{}{}", Theme::bold(), Theme::fg(trend));
    print!("{title}");
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{}┐", "─".repeat(inner.saturating_sub(1 + display_width(&title))));
    print!("{}", Theme::reset());

    let price_width = display_width(&card.price).min(inner / 2);
    let label_width = inner.saturating_sub(price_width + 3);
    let label = truncate(&format!("{} ({})", card.name, card.symbol), label_width);

    position_cursor(row + 1, col);
    print!("{}│ ", Theme::fg(&theme.colors.border));
    print!("{}{}", Theme::fg(&theme.colors.text_normal), fit(&label, label_width, false));
    print!(" {}{}", Theme::bold(), fit(&card.price, price_width, true));
    print!("{} {}│", Theme::reset(), Theme::fg(&theme.colors.border));

    position_cursor(row + 2, col);
    print!("{}│ ", Theme::fg(&theme.colors.border));
    print!("{}", Theme::fg(trend));
    print!("{}", fit(&card.change, inner.saturating_sub(2), true));
    print!(" {}│", Theme::fg(&theme.colors.border));

    position_cursor(row + 3, col);
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}
