//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. Every string
//! in here is display-ready: numbers are already formatted for the snapshot's
//! locale, and highlight ranges are precomputed.
//!
//! # Example
//!
//! ```rust
//! use coinpane::ui::viewmodel::{DisplayItem, Trend};
//!
//! let item = DisplayItem {
//!     name: "Bitcoin".to_string(),
//!     symbol: "BTC".to_string(),
//!     price: "€ 50 000".to_string(),
//!     market_cap: "€ 900 000".to_string(),
//!     change: "2.50%".to_string(),
//!     trend: Trend::Up,
//!     is_selected: true,
//!     highlight_ranges: vec![(0, 3)],
//! };
//! assert_eq!(item.trend, Trend::Up);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Rows of the visible table window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the selected row within `display_items`.
    pub selected_index: usize,

    pub header: HeaderInfo,

    /// Gainer and loser cards, omitted while loading or when there are none.
    pub summary: Option<SummaryCards>,

    /// Present in search mode.
    pub search_bar: Option<SearchBarInfo>,

    pub status: StatusLine,

    /// Table column headers with sort indicators.
    pub columns: Vec<ColumnHeader>,

    /// Shown instead of the table when it has no rows.
    pub empty_state: Option<EmptyState>,

    pub footer: FooterInfo,
}

/// Direction of a 24h change, selecting its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
    /// No change figure available.
    Unknown,
}

impl Trend {
    #[must_use]
    pub fn from_change(change: Option<f64>) -> Self {
        match change {
            Some(c) if c > 0.0 => Self::Up,
            Some(c) if c < 0.0 => Self::Down,
            Some(_) => Self::Flat,
            None => Self::Unknown,
        }
    }
}

/// One table row.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayItem {
    pub name: String,
    /// Upper-cased ticker symbol.
    pub symbol: String,
    pub price: String,
    pub market_cap: String,
    pub change: String,
    pub trend: Trend,
    pub is_selected: bool,

    /// Character ranges of `name` matching the search query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Selected display currency label, e.g. `EUR`.
    pub currency: String,
    /// Activity indicator while a fetch is outstanding.
    pub activity: Option<String>,
}

/// Top gainer and top loser cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub gainer: SummaryCard,
    pub loser: SummaryCard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    /// Card caption, e.g. `Top gainer (24h)`.
    pub title: String,
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub change: String,
    pub trend: Trend,
}

/// Line between the search bar and the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusLine {
    /// `Showing X of Y assets`, hidden while loading.
    pub counts: Option<String>,
    /// `Last updated: HH:MM:SS`, present once a snapshot exists.
    pub last_updated: Option<String>,
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One table column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    pub label: &'static str,
    /// `▲`/`▼` on the active sort column, `↕` elsewhere.
    pub indicator: char,
    pub is_active: bool,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text.
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    /// Whether keystrokes currently go to the search field.
    pub is_typing: bool,
}
