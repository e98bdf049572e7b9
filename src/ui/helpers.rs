//! Shared rendering utilities and helpers.
//!
//! Low-level pieces used across components: cursor positioning, search match
//! highlighting, and width-aware padding. Widths are counted in characters,
//! not bytes, so currency signs and accented names line up.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column (1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Visible width of `text` in terminal cells.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Truncates `text` to `width` characters, ending in `…` when cut.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if display_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(width - 1).collect();
    out.push('…');
    out
}

/// Pads or truncates `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize, right_align: bool) -> String {
    let text = truncate(text, width);
    let pad = " ".repeat(width.saturating_sub(display_width(&text)));
    if right_align {
        format!("{pad}{text}")
    } else {
        format!("{text}{pad}")
    }
}

/// Character ranges of `text` where `query` occurs, case-insensitively.
///
/// Occurrences do not overlap. A blank query matches nothing.
///
/// ```
/// use coinpane::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Bitcoin Cash", "c"), vec![(3, 4), (8, 9)]);
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.trim().is_empty() {
        return vec![];
    }

    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    let mut folded = Vec::with_capacity(text.len());
    let mut origin = Vec::with_capacity(text.len());
    for (idx, ch) in text.chars().enumerate() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.push(idx);
        }
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        if folded[i..i + needle.len()] == needle[..] {
            ranges.push((origin[i], origin[i + needle.len() - 1] + 1));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

/// Renders text with highlighted character ranges for search matches.
///
/// When `is_selected` is `true`, match highlighting is skipped so the
/// selection background stays uniform. After each highlighted section the
/// base color is restored.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_ranges_are_case_insensitive_and_non_overlapping() {
        assert_eq!(match_ranges("Ethereum", "E"), vec![(0, 1), (4, 5)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("Bitcoin", "  ").is_empty());
        assert!(match_ranges("Bitcoin", "xyz").is_empty());
    }

    #[test]
    fn match_ranges_use_character_indices() {
        assert_eq!(match_ranges("Éther", "th"), vec![(1, 3)]);
    }

    #[test]
    fn fit_pads_and_truncates_by_characters() {
        assert_eq!(fit("€ 5", 5, true), "  € 5");
        assert_eq!(fit("abc", 5, false), "abc  ");
        assert_eq!(fit("Bitcoin Cash", 6, false), "Bitco…");
        assert_eq!(truncate("abc", 0), "");
    }
}
