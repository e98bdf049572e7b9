//! Market data client.
//!
//! The plugin runtime performs HTTP on our behalf and reports back through an
//! event, so a fetch is split in two: [`MarketClient::begin`] hands out a tagged
//! [`MarketRequest`], and [`MarketClient::resolve`] turns the matching
//! [`MarketResponse`] into coins or a [`FetchFailure`].
//!
//! Only the most recently issued request may change state. A response to an
//! older request is reported as [`FetchOutcome::Stale`] and dropped, so a slow
//! EUR response can never overwrite a newer USD snapshot.

use super::request::{MarketRequest, MarketResponse, PAGE_SIZE};
use crate::domain::{Coin, Currency, FetchFailure};
use std::collections::HashSet;

/// Result of resolving a market response.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// The latest request succeeded.
    Loaded {
        /// Currency the coins are priced in.
        currency: Currency,
        /// Coins in source order (descending market cap).
        coins: Vec<Coin>,
    },
    /// The latest request failed; the caller keeps its previous snapshot.
    Failed(FetchFailure),
    /// The response belongs to a superseded request.
    Stale,
}

/// Issues request tokens and matches responses to the latest one.
#[derive(Debug, Clone, Default)]
pub struct MarketClient {
    next_id: u64,
    latest: Option<u64>,
}

impl MarketClient {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new fetch for `currency`, superseding any outstanding one.
    pub fn begin(&mut self, currency: Currency) -> MarketRequest {
        self.next_id += 1;
        self.latest = Some(self.next_id);
        tracing::debug!(request_id = self.next_id, currency = %currency, "market request issued");
        MarketRequest::new(self.next_id, currency)
    }

    /// Whether a request has been issued and not yet resolved.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.latest.is_some()
    }

    /// Resolves a response against the latest issued request.
    pub fn resolve(&mut self, response: &MarketResponse) -> FetchOutcome {
        let request_id = response.request_id();
        if request_id.is_none() || request_id != self.latest {
            tracing::debug!(
                request_id = ?request_id,
                latest = ?self.latest,
                "discarding stale market response"
            );
            return FetchOutcome::Stale;
        }
        self.latest = None;

        let Some(currency) = response.currency() else {
            return FetchOutcome::Failed(FetchFailure::new("response context lost its currency"));
        };

        if !response.is_success() {
            return FetchOutcome::Failed(FetchFailure::status(response.status));
        }

        match parse_markets(&response.body) {
            Ok(coins) => FetchOutcome::Loaded { currency, coins },
            Err(failure) => FetchOutcome::Failed(failure),
        }
    }
}

/// Parses a markets response body into coins.
///
/// The order of the source is kept. More than [`PAGE_SIZE`] entries are
/// truncated and repeated ids are dropped (first occurrence wins), so the
/// result always satisfies the snapshot invariants.
///
/// # Errors
///
/// Returns a [`FetchFailure`] when the body is not a JSON array of coin objects.
pub fn parse_markets(body: &[u8]) -> Result<Vec<Coin>, FetchFailure> {
    let parsed: Vec<Coin> = serde_json::from_slice(body).map_err(|e| FetchFailure::parse(&e))?;
    let received = parsed.len();

    let mut seen = HashSet::with_capacity(received);
    let coins: Vec<Coin> = parsed
        .into_iter()
        .filter(|coin| {
            let fresh = seen.insert(coin.id.clone());
            if !fresh {
                tracing::warn!(id = %coin.id, "dropping duplicate coin id");
            }
            fresh
        })
        .take(PAGE_SIZE)
        .collect();

    if received > PAGE_SIZE {
        tracing::warn!(received, kept = coins.len(), "markets response exceeded page size");
    }
    tracing::debug!(coin_count = coins.len(), "markets response parsed");

    Ok(coins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::request::MarketResponse;

    fn body(entries: &[(&str, &str, f64)]) -> Vec<u8> {
        let items: Vec<String> = entries
            .iter()
            .map(|(id, name, cap)| {
                format!(
                    r#"{{"id":"{id}","symbol":"{id}","name":"{name}","image":"https://img/{id}.png","current_price":1.5,"market_cap":{cap},"price_change_percentage_24h":0.5}}"#
                )
            })
            .collect();
        format!("[{}]", items.join(",")).into_bytes()
    }

    fn respond(request: &MarketRequest, status: u16, body: Vec<u8>) -> MarketResponse {
        MarketResponse {
            status,
            body,
            context: request.context(),
        }
    }

    #[test]
    fn successful_response_keeps_source_order() {
        let mut client = MarketClient::new();
        let request = client.begin(Currency::Eur);
        let outcome = client.resolve(&respond(
            &request,
            200,
            body(&[("bitcoin", "Bitcoin", 9.0), ("tether", "Tether", 1.0), ("ethereum", "Ethereum", 4.0)]),
        ));

        let FetchOutcome::Loaded { currency, coins } = outcome else {
            panic!("expected loaded outcome, got {outcome:?}");
        };
        assert_eq!(currency, Currency::Eur);
        let ids: Vec<&str> = coins.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["bitcoin", "tether", "ethereum"]);
        assert!(!client.is_pending());
    }

    #[test]
    fn non_success_status_is_a_failure() {
        let mut client = MarketClient::new();
        let request = client.begin(Currency::Usd);
        let outcome = client.resolve(&respond(&request, 429, b"rate limited".to_vec()));
        assert_eq!(outcome, FetchOutcome::Failed(FetchFailure::status(429)));
    }

    #[test]
    fn unexpected_shape_is_a_failure() {
        let mut client = MarketClient::new();
        let request = client.begin(Currency::Usd);
        let outcome = client.resolve(&respond(&request, 200, br#"{"status":"ok"}"#.to_vec()));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));

        let request = client.begin(Currency::Usd);
        let missing_price = br#"[{"id":"a","symbol":"a","name":"A","image":"","market_cap":1}]"#;
        let outcome = client.resolve(&respond(&request, 200, missing_price.to_vec()));
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
    }

    #[test]
    fn older_response_is_stale_once_superseded() {
        let mut client = MarketClient::new();
        let first = client.begin(Currency::Eur);
        let second = client.begin(Currency::Usd);

        let outcome = client.resolve(&respond(&first, 200, body(&[("bitcoin", "Bitcoin", 1.0)])));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert!(client.is_pending());

        let outcome = client.resolve(&respond(&second, 200, body(&[("bitcoin", "Bitcoin", 1.0)])));
        assert!(matches!(outcome, FetchOutcome::Loaded { currency: Currency::Usd, .. }));
    }

    #[test]
    fn response_without_token_is_stale() {
        let mut client = MarketClient::new();
        let _request = client.begin(Currency::Eur);
        let outcome = client.resolve(&MarketResponse {
            status: 200,
            body: body(&[]),
            context: Default::default(),
        });
        assert_eq!(outcome, FetchOutcome::Stale);
    }

    #[test]
    fn duplicate_ids_and_overflow_are_trimmed() {
        let mut entries: Vec<(String, String, f64)> = (0..55)
            .map(|i| (format!("coin-{i}"), format!("Coin {i}"), f64::from(100 - i)))
            .collect();
        entries.insert(1, ("coin-0".to_string(), "Again".to_string(), 1.0));
        let borrowed: Vec<(&str, &str, f64)> = entries
            .iter()
            .map(|(id, name, cap)| (id.as_str(), name.as_str(), *cap))
            .collect();

        let coins = parse_markets(&body(&borrowed)).unwrap();
        assert_eq!(coins.len(), PAGE_SIZE);
        assert_eq!(coins[0].name, "Coin 0");
        assert_eq!(coins[1].id, "coin-1");
    }
}
