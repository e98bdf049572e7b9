//! Coin market record.
//!
//! A [`Coin`] is one asset's market snapshot at fetch time, deserialized
//! directly from the CoinGecko `/coins/markets` response. Field names match the
//! wire format; unknown fields in the payload are ignored.

use serde::{Deserialize, Serialize};

/// One market asset as returned by the markets endpoint.
///
/// Prices and market cap are denominated in the currency the snapshot was
/// fetched in. The 24h change is a percentage and is `None` for assets the
/// source has no change figure for (typically newly listed ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap: f64,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
}

impl Coin {
    /// Returns the 24h change if it is a usable number.
    ///
    /// NaN never reaches here from JSON, but records built in code might carry
    /// one, so it is filtered the same way as a missing value.
    #[must_use]
    pub fn change_24h(&self) -> Option<f64> {
        self.price_change_percentage_24h.filter(|c| !c.is_nan())
    }

    /// Ticker symbol in upper case, as shown in the table and summary cards.
    #[must_use]
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_markets_entry_and_ignores_extra_fields() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 61234.5,
            "market_cap": 1205000000000,
            "market_cap_rank": 1,
            "total_volume": 31000000000,
            "price_change_percentage_24h": -0.42
        }"#;

        let coin: Coin = serde_json::from_str(json).unwrap();
        assert_eq!(coin.id, "bitcoin");
        assert_eq!(coin.display_symbol(), "BTC");
        assert_eq!(coin.market_cap, 1_205_000_000_000.0);
        assert_eq!(coin.change_24h(), Some(-0.42));
    }

    #[test]
    fn null_or_missing_change_is_none() {
        let with_null = r#"{"id":"x","symbol":"x","name":"X","image":"","current_price":1,"market_cap":2,"price_change_percentage_24h":null}"#;
        let missing = r#"{"id":"y","symbol":"y","name":"Y","image":"","current_price":1,"market_cap":2}"#;

        let a: Coin = serde_json::from_str(with_null).unwrap();
        let b: Coin = serde_json::from_str(missing).unwrap();
        assert_eq!(a.change_24h(), None);
        assert_eq!(b.change_24h(), None);
    }

    #[test]
    fn nan_change_is_treated_as_missing() {
        let mut coin = fixtures::bitcoin();
        coin.price_change_percentage_24h = Some(f64::NAN);
        assert_eq!(coin.change_24h(), None);
    }
}
