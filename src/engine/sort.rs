//! Row ordering.

use super::collate::Collation;
use super::params::{SortDirection, SortKey};
use crate::domain::Coin;
use std::cmp::Ordering;

/// Sorts rows in place by `key` and `direction`.
///
/// The sort is stable: equal rows keep their source order in both directions.
/// When sorting by 24h change, rows without a change value always come last.
pub fn sort_coins(
    rows: &mut [&Coin],
    key: SortKey,
    direction: SortDirection,
    collator: &mut dyn Collation,
) {
    rows.sort_by(|a, b| compare(a, b, key, direction, &mut *collator));
}

fn compare(
    a: &Coin,
    b: &Coin,
    key: SortKey,
    direction: SortDirection,
    collator: &mut dyn Collation,
) -> Ordering {
    let ordering = match key {
        SortKey::Name => collator.compare(&a.name, &b.name),
        SortKey::Price => a.current_price.total_cmp(&b.current_price),
        SortKey::MarketCap => a.market_cap.total_cmp(&b.market_cap),
        SortKey::Change24h => match (a.change_24h(), b.change_24h()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => return Ordering::Less,
            (None, Some(_)) => return Ordering::Greater,
            (None, None) => return Ordering::Equal,
        },
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}
