//! Search filtering.

use crate::domain::Coin;

/// Whether `coin` passes the search query.
///
/// A blank query (empty or whitespace only) matches everything. Otherwise the
/// query must occur, case-insensitively, in the coin's name or symbol. A
/// non-blank query is matched as typed, surrounding spaces included.
#[must_use]
pub fn matches_query(coin: &Coin, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    coin.name.to_lowercase().contains(&needle) || coin.symbol.to_lowercase().contains(&needle)
}

/// Coins passing `query`, in their original order.
#[must_use]
pub fn filter_coins<'a>(coins: &'a [Coin], query: &str) -> Vec<&'a Coin> {
    coins.iter().filter(|coin| matches_query(coin, query)).collect()
}
