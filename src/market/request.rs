//! Market request and response types exchanged with the plugin runtime.
//!
//! A [`MarketRequest`] is what the handler asks the runtime to fetch. The
//! runtime hands the result back as a [`MarketResponse`], carrying the same
//! context map it was given so the response can be matched to its request.

use crate::domain::Currency;
use std::collections::BTreeMap;

/// Markets endpoint of the CoinGecko public API.
pub const MARKETS_ENDPOINT: &str = "https://api.coingecko.com/api/v3/coins/markets";

/// Number of assets requested; the endpoint is asked for a single page of this size.
pub const PAGE_SIZE: usize = 50;

const CONTEXT_REQUEST_ID: &str = "request_id";
const CONTEXT_CURRENCY: &str = "currency";

/// Builds the markets URL for a currency.
///
/// # Example
///
/// ```
/// use coinpane::domain::Currency;
/// use coinpane::market::markets_url;
///
/// assert_eq!(
///     markets_url(Currency::Usd),
///     "https://api.coingecko.com/api/v3/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=50&page=1&sparkline=false"
/// );
/// ```
#[must_use]
pub fn markets_url(currency: Currency) -> String {
    format!(
        "{MARKETS_ENDPOINT}?vs_currency={}&order=market_cap_desc&per_page={PAGE_SIZE}&page=1&sparkline=false",
        currency.code()
    )
}

/// A single GET against the markets endpoint, tagged with a request token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketRequest {
    /// Token identifying this request among all issued ones.
    pub id: u64,
    /// Currency the prices are requested in.
    pub currency: Currency,
    /// Fully built request URL.
    pub url: String,
}

impl MarketRequest {
    #[must_use]
    pub fn new(id: u64, currency: Currency) -> Self {
        Self {
            id,
            currency,
            url: markets_url(currency),
        }
    }

    /// Headers sent with the request.
    #[must_use]
    pub fn headers() -> BTreeMap<String, String> {
        BTreeMap::from([
            ("Accept".to_string(), "application/json".to_string()),
            (
                "User-Agent".to_string(),
                concat!("coinpane/", env!("CARGO_PKG_VERSION")).to_string(),
            ),
        ])
    }

    /// Context map travelling with the web request and returned with its result.
    #[must_use]
    pub fn context(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_REQUEST_ID.to_string(), self.id.to_string()),
            (CONTEXT_CURRENCY.to_string(), self.currency.code().to_string()),
        ])
    }
}

/// Raw result of a market request as delivered by the runtime.
///
/// Transport failures arrive here too, as a non-success status with whatever
/// body the runtime supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub context: BTreeMap<String, String>,
}

impl MarketResponse {
    /// Request token recovered from the context, if present and well formed.
    #[must_use]
    pub fn request_id(&self) -> Option<u64> {
        self.context
            .get(CONTEXT_REQUEST_ID)
            .and_then(|id| id.parse().ok())
    }

    /// Currency recovered from the context, if present and well formed.
    #[must_use]
    pub fn currency(&self) -> Option<Currency> {
        self.context
            .get(CONTEXT_CURRENCY)
            .and_then(|c| c.parse().ok())
    }

    /// Whether the status is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}
