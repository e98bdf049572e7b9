//! Last successfully fetched market snapshot.

use super::{Coin, Currency};
use chrono::{DateTime, Local};

/// Coin list from one successful fetch, with the currency it is priced in.
///
/// A snapshot is only ever replaced as a whole. Keeping the currency next to
/// the prices means a failed currency switch still labels the old prices
/// correctly.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketSnapshot {
    pub currency: Currency,
    pub coins: Vec<Coin>,
    pub fetched_at: DateTime<Local>,
}

impl MarketSnapshot {
    #[must_use]
    pub const fn new(currency: Currency, coins: Vec<Coin>, fetched_at: DateTime<Local>) -> Self {
        Self {
            currency,
            coins,
            fetched_at,
        }
    }

    /// Fetch time as `HH:MM:SS` local time.
    #[must_use]
    pub fn last_updated(&self) -> String {
        self.fetched_at.format("%H:%M:%S").to_string()
    }
}
