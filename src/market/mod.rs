//! Market data client for the CoinGecko markets endpoint.
//!
//! - `request`: URL building and the request/response types shared with the
//!   plugin runtime
//! - `client`: request tokens, response resolution, and body parsing

pub mod client;
pub mod request;

pub use client::{parse_markets, FetchOutcome, MarketClient};
pub use request::{markets_url, MarketRequest, MarketResponse, MARKETS_ENDPOINT, PAGE_SIZE};
