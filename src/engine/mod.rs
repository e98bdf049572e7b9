//! View-state engine.
//!
//! Turns the fetched coin list and the current [`ViewParameters`] into exactly
//! what the dashboard shows: the filtered and ordered rows, the top gainer and
//! loser, and the row counts. Everything here is pure and total; the result is
//! recomputed whenever it is needed and never stored.
//!
//! - [`params`]: search, sort, and currency selection
//! - [`filter`]: case-insensitive name/symbol search
//! - [`sort`]: stable ordering by column
//! - [`summary`]: gainer/loser over the unfiltered list
//! - [`collate`]: name collation

pub mod collate;
pub mod filter;
pub mod params;
pub mod sort;
pub mod summary;

pub use collate::{BytewiseCollator, Collation, UnicodeCollator};
pub use filter::{filter_coins, matches_query};
pub use params::{SortDirection, SortKey, ViewParameters};
pub use sort::sort_coins;
pub use summary::{top_gainer, top_loser};

use crate::domain::Coin;

/// Everything the table and summary cards need for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView<'a> {
    /// Rows after search and sort.
    pub rows: Vec<&'a Coin>,
    pub gainer: Option<&'a Coin>,
    pub loser: Option<&'a Coin>,
    /// Number of rows shown.
    pub shown: usize,
    /// Number of coins in the snapshot.
    pub total: usize,
}

impl DerivedView<'_> {
    /// Status line text, e.g. `Showing 3 of 50 assets`.
    #[must_use]
    pub fn counts_label(&self) -> String {
        format!("Showing {} of {} assets", self.shown, self.total)
    }

    /// Whether both summary cards can be drawn.
    #[must_use]
    pub const fn has_summary(&self) -> bool {
        self.gainer.is_some() && self.loser.is_some()
    }
}

/// Derives the visible view from the snapshot and parameters.
///
/// The currency in `params` plays no part here; prices are already in the
/// snapshot's currency.
#[must_use]
pub fn derive_view<'a>(
    coins: &'a [Coin],
    params: &ViewParameters,
    collator: &mut dyn Collation,
) -> DerivedView<'a> {
    let _span = tracing::debug_span!(
        "derive_view",
        total = coins.len(),
        sort_key = ?params.sort_key,
        sort_direction = ?params.sort_direction,
    )
    .entered();

    let mut rows = filter_coins(coins, &params.search_text);
    sort_coins(&mut rows, params.sort_key, params.sort_direction, collator);

    DerivedView {
        shown: rows.len(),
        total: coins.len(),
        gainer: top_gainer(coins),
        loser: top_loser(coins),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coin::fixtures::{bitcoin, coin, ether};

    fn names<'a>(view: &DerivedView<'a>) -> Vec<&'a str> {
        view.rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn bitcoin_ether_worked_example() {
        let coins = vec![bitcoin(), ether()];
        let mut params = ViewParameters::default();

        let view = derive_view(&coins, &params, &mut UnicodeCollator::new());
        assert_eq!(names(&view), ["Bitcoin", "Ether"]);
        assert_eq!(view.gainer.map(|c| c.name.as_str()), Some("Bitcoin"));
        assert_eq!(view.loser.map(|c| c.name.as_str()), Some("Ether"));
        assert_eq!(view.counts_label(), "Showing 2 of 2 assets");

        params.search_text = "eth".to_string();
        let view = derive_view(&coins, &params, &mut UnicodeCollator::new());
        assert_eq!(names(&view), ["Ether"]);
        assert_eq!(view.gainer.map(|c| c.name.as_str()), Some("Bitcoin"));
        assert_eq!(view.loser.map(|c| c.name.as_str()), Some("Ether"));
        assert_eq!(view.counts_label(), "Showing 1 of 2 assets");

        params.search_text.clear();
        params.select_sort(SortKey::Change24h);
        let view = derive_view(&coins, &params, &mut UnicodeCollator::new());
        assert_eq!(names(&view), ["Bitcoin", "Ether"]);

        params.select_sort(SortKey::Change24h);
        let view = derive_view(&coins, &params, &mut UnicodeCollator::new());
        assert_eq!(names(&view), ["Ether", "Bitcoin"]);
    }

    #[test]
    fn empty_snapshot_derives_empty_view() {
        let view = derive_view(&[], &ViewParameters::default(), &mut BytewiseCollator);
        assert!(view.rows.is_empty());
        assert!(!view.has_summary());
        assert_eq!(view.counts_label(), "Showing 0 of 0 assets");
    }

    #[test]
    fn summary_ignores_search() {
        let coins = vec![
            bitcoin(),
            ether(),
            coin("Solana", "sol", 140.0, 60_000.0, Some(4.1)),
        ];
        let params = ViewParameters {
            search_text: "zzz".to_string(),
            ..ViewParameters::default()
        };
        let view = derive_view(&coins, &params, &mut BytewiseCollator);
        assert_eq!(view.shown, 0);
        assert_eq!(view.total, 3);
        assert_eq!(view.gainer.map(|c| c.name.as_str()), Some("Solana"));
        assert_eq!(view.loser.map(|c| c.name.as_str()), Some("Ether"));
    }

    #[test]
    fn default_view_keeps_source_order_for_sorted_source() {
        let coins = vec![bitcoin(), ether(), coin("Solana", "sol", 140.0, 60_000.0, Some(4.1))];
        let view = derive_view(&coins, &ViewParameters::default(), &mut BytewiseCollator);
        assert_eq!(names(&view), ["Bitcoin", "Ether", "Solana"]);
    }
}
