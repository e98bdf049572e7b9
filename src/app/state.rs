//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin: the last market
//! snapshot, the user's view parameters, the fetch bookkeeping, and the cursor.
//! Nothing derived from the snapshot is stored. Rows, counts, and the summary
//! cards are recomputed from (snapshot, parameters) whenever they are needed,
//! so they can never drift out of sync with the data.
//!
//! # Example
//!
//! ```rust
//! use coinpane::app::AppState;
//! use coinpane::engine::ViewParameters;
//! use coinpane::ui::Theme;
//!
//! let state = AppState::new(ViewParameters::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(viewmodel.display_items.is_empty());
//! ```

use super::modes::{InputMode, LoadState, SearchFocus};
use super::Action;
use crate::domain::{Coin, Currency, MarketSnapshot};
use crate::engine::{derive_view, DerivedView, SortDirection, SortKey, UnicodeCollator, ViewParameters};
use crate::market::MarketClient;
use crate::ui::components::{BASE_CHROME_ROWS, SEARCH_BAR_ROWS, SUMMARY_ROWS};
use crate::ui::format::{LocaleFormat, NumberFormat};
use crate::ui::helpers::match_ranges;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Align, ColumnHeader, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo,
    StatusLine, SummaryCard, SummaryCards, Trend, UIViewModel,
};

const TITLE: &str = " Coinpane · Top 50 by market cap ";

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Last successfully fetched coin list; `None` until the first success.
    pub snapshot: Option<MarketSnapshot>,

    /// Search, sort, and selected currency.
    pub params: ViewParameters,

    /// Request token bookkeeping for market fetches.
    pub client: MarketClient,

    pub load_state: LoadState,

    pub input_mode: InputMode,

    /// Cursor position within the derived rows.
    ///
    /// May exceed the row count after the rows shrink; readers clamp it with
    /// [`AppState::selected_row`].
    pub selected_index: usize,

    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(params: ViewParameters, theme: Theme) -> Self {
        Self {
            snapshot: None,
            params,
            client: MarketClient::new(),
            load_state: LoadState::Idle,
            input_mode: InputMode::Normal,
            selected_index: 0,
            theme,
        }
    }

    /// Coins of the current snapshot, empty before the first fetch.
    #[must_use]
    pub fn coins(&self) -> &[Coin] {
        self.snapshot
            .as_ref()
            .map(|s| s.coins.as_slice())
            .unwrap_or_default()
    }

    /// Derives the visible rows and summary from the snapshot and parameters.
    #[must_use]
    pub fn derived_view(&self) -> DerivedView<'_> {
        derive_view(self.coins(), &self.params, &mut UnicodeCollator::new())
    }

    /// Cursor clamped to a view with `row_count` rows.
    #[must_use]
    pub fn selected_row(&self, row_count: usize) -> usize {
        self.selected_index.min(row_count.saturating_sub(1))
    }

    /// Moves selection cursor down by one position, wrapping to top if at end.
    pub fn move_selection_down(&mut self) {
        let count = self.derived_view().shown;
        if count == 0 {
            return;
        }
        self.selected_index = (self.selected_row(count) + 1) % count;
    }

    /// Moves selection cursor up by one position, wrapping to bottom if at start.
    pub fn move_selection_up(&mut self) {
        let count = self.derived_view().shown;
        if count == 0 {
            return;
        }
        let current = self.selected_row(count);
        self.selected_index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// The coin under the cursor, if any.
    #[must_use]
    pub fn selected_coin(&self) -> Option<&Coin> {
        let view = self.derived_view();
        let index = self.selected_row(view.shown);
        view.rows.get(index).copied()
    }

    /// Starts a fetch for the selected currency and moves to `load_state`.
    pub fn begin_fetch(&mut self, load_state: LoadState) -> Action {
        self.load_state = load_state;
        Action::FetchMarkets(self.client.begin(self.params.currency))
    }

    /// Resets the search query and returns to normal mode.
    pub fn clear_search(&mut self) {
        self.input_mode = InputMode::Normal;
        self.params.search_text.clear();
        self.selected_index = 0;
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate available rows after subtracting UI chrome (header, cards,
    ///    search bar, status, column headers, footer)
    /// 2. Center window around selected index (selected index at midpoint)
    /// 3. Adjust window if near start/end to maximize visible items
    /// 4. Compute relative selection index within visible window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::debug_span!("compute_viewmodel", rows, cols).entered();

        let view = self.derived_view();
        let loading = self.load_state == LoadState::Loading;
        let format = LocaleFormat::for_currency(self.display_currency());

        let summary = if loading {
            None
        } else {
            Self::compute_summary(&view, &format)
        };
        let search_bar = self.compute_search_bar();
        let empty_state = self.compute_empty_state(&view, loading);

        let mut display_items = vec![];
        let mut selected_display_index = 0;

        if empty_state.is_none() {
            let available_rows = Self::calculate_available_rows(
                rows,
                summary.is_some(),
                search_bar.is_some(),
            );
            let selected = self.selected_row(view.shown);

            let mut visible_start = selected.saturating_sub(available_rows / 2);
            let visible_end = (visible_start + available_rows).min(view.shown);

            let actual_count = visible_end - visible_start;
            if actual_count < available_rows && view.shown >= available_rows {
                visible_start = visible_end.saturating_sub(available_rows);
            }

            display_items = view.rows[visible_start..visible_end]
                .iter()
                .enumerate()
                .map(|(relative_idx, coin)| {
                    self.compute_display_item(coin, visible_start + relative_idx == selected, &format)
                })
                .collect();
            selected_display_index = selected.saturating_sub(visible_start);
        }

        UIViewModel {
            display_items,
            selected_index: selected_display_index,
            header: self.compute_header(),
            summary,
            search_bar,
            status: self.compute_status(&view, loading),
            columns: self.compute_columns(),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    /// Currency the displayed values are priced in. Falls back to the selected
    /// currency before any data has arrived.
    fn display_currency(&self) -> Currency {
        self.snapshot
            .as_ref()
            .map_or(self.params.currency, |s| s.currency)
    }

    fn compute_display_item(&self, coin: &Coin, is_selected: bool, format: &LocaleFormat) -> DisplayItem {
        let change = coin.change_24h();
        DisplayItem {
            name: coin.name.clone(),
            symbol: coin.display_symbol(),
            price: format.price(coin.current_price),
            market_cap: format.market_cap(coin.market_cap),
            change: format.change(change, false),
            trend: Trend::from_change(change),
            is_selected,
            highlight_ranges: match_ranges(&coin.name, &self.params.search_text),
        }
    }

    fn compute_summary(view: &DerivedView<'_>, format: &LocaleFormat) -> Option<SummaryCards> {
        let (gainer, loser) = (view.gainer?, view.loser?);
        let card = |title: &str, coin: &Coin, explicit_plus: bool| {
            let change = coin.change_24h();
            SummaryCard {
                title: title.to_string(),
                name: coin.name.clone(),
                symbol: coin.display_symbol(),
                price: format.price(coin.current_price),
                change: format.change(change, explicit_plus),
                trend: Trend::from_change(change),
            }
        };
        Some(SummaryCards {
            gainer: card("Top gainer (24h)", gainer, true),
            loser: card("Top loser (24h)", loser, false),
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let activity = match self.load_state {
            LoadState::Idle => None,
            LoadState::Loading => Some("Fetching data…".to_string()),
            LoadState::Refreshing => Some("↻ Refreshing…".to_string()),
        };
        HeaderInfo {
            title: TITLE.to_string(),
            currency: self.params.currency.label().to_string(),
            activity,
        }
    }

    fn compute_status(&self, view: &DerivedView<'_>, loading: bool) -> StatusLine {
        StatusLine {
            counts: (!loading).then(|| view.counts_label()),
            last_updated: self
                .snapshot
                .as_ref()
                .map(|s| format!("Last updated: {}", s.last_updated())),
        }
    }

    fn compute_columns(&self) -> Vec<ColumnHeader> {
        [
            ("ASSET", SortKey::Name, Align::Left),
            ("PRICE", SortKey::Price, Align::Right),
            ("MARKET CAP", SortKey::MarketCap, Align::Right),
            ("24H %", SortKey::Change24h, Align::Right),
        ]
        .into_iter()
        .map(|(label, key, align)| {
            let is_active = self.params.sort_key == key;
            let indicator = match (is_active, self.params.sort_direction) {
                (false, _) => '↕',
                (true, SortDirection::Ascending) => '▲',
                (true, SortDirection::Descending) => '▼',
            };
            ColumnHeader {
                label,
                indicator,
                is_active,
                align,
            }
        })
        .collect()
    }

    fn compute_empty_state(&self, view: &DerivedView<'_>, loading: bool) -> Option<EmptyState> {
        if loading {
            return Some(EmptyState {
                message: "Loading prices from CoinGecko…".to_string(),
                subtitle: format!("Fetching the top 50 assets in {}.", self.params.currency),
            });
        }
        if self.snapshot.is_none() {
            return Some(EmptyState {
                message: "No market data available.".to_string(),
                subtitle: "Press r to try again.".to_string(),
            });
        }
        if view.rows.is_empty() {
            return Some(EmptyState {
                message: "No assets match your search.".to_string(),
                subtitle: "Try a different query.".to_string(),
            });
        }
        None
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: clear search  Enter: browse results  Ctrl+n/p: navigate  Type to filter"
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: clear search  /: edit query  j/k: navigate  n/p/m/c: sort  e/u/t: currency"
            }
            InputMode::Normal => {
                "j/k: navigate  /: search  n/p/m/c: sort  e/u/t: currency  r: refresh  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        match self.input_mode {
            InputMode::Search(focus) => Some(SearchBarInfo {
                query: self.params.search_text.clone(),
                is_typing: focus == SearchFocus::Typing,
            }),
            InputMode::Normal => None,
        }
    }

    const fn calculate_available_rows(total_rows: usize, has_summary: bool, has_search: bool) -> usize {
        let mut chrome = BASE_CHROME_ROWS;
        if has_summary {
            chrome += SUMMARY_ROWS;
        }
        if has_search {
            chrome += SEARCH_BAR_ROWS;
        }
        total_rows.saturating_sub(chrome)
    }
}
