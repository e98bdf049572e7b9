//! Domain layer for the Coinpane plugin.
//!
//! Core types independent of Zellij APIs and of how data is fetched or shown.
//!
//! # Organization
//!
//! - [`coin`]: the market record for one asset
//! - [`currency`]: EUR/USD display currency
//! - [`error`]: error types and result alias
//! - [`snapshot`]: the last fetched coin list and its currency
//!
//! # Examples
//!
//! ```
//! use coinpane::domain::{Currency, FetchFailure, Result};
//!
//! fn check_status(status: u16) -> Result<Currency> {
//!     if (200..300).contains(&status) {
//!         Ok(Currency::Eur)
//!     } else {
//!         Err(FetchFailure::status(status).into())
//!     }
//! }
//! ```

pub mod coin;
pub mod currency;
pub mod error;
pub mod snapshot;

pub use coin::Coin;
pub use currency::Currency;
pub use error::{CoinpaneError, FetchFailure, Result};
pub use snapshot::MarketSnapshot;
