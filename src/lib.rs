//! Coinpane: a Zellij plugin showing the top 50 cryptocurrencies by market cap.
//!
//! Coinpane fetches a market snapshot from the CoinGecko markets endpoint and
//! renders it as a dashboard pane:
//! - Top gainer and top loser cards over the full snapshot
//! - Live search by name or symbol
//! - Sortable columns for name, price, market cap and 24h change
//! - EUR and USD display currencies with locale-aware number formatting

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Keys, web requests
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine        │   │ Market        │
//! │ (ui/)         │   │ (engine/)     │   │ (market/)     │
//! │ - Rendering   │   │ - Filter      │   │ - Request URL │
//! │ - Theming     │   │ - Sort        │   │ - Tokens      │
//! │ - Formatting  │   │ - Gainer/loser│   │ - JSON parse  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Coin, Currency, MarketSnapshot, errors           │
//! │  - Sandbox paths                                    │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing, file-based OTLP export    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/coinpane.wasm" {
//!         currency "usd"
//!         theme "catppuccin-latte"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Data Flow
//!
//! 1. Permissions granted → `Action::FetchMarkets` with a fresh request token
//! 2. The shim performs the web request; the result comes back as
//!    `Event::MarketResponse`
//! 3. Only the response carrying the latest token replaces the snapshot
//! 4. Every render derives rows, counts and cards from (snapshot, parameters)
//!
//! # Example
//!
//! ```rust
//! use coinpane::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! let Action::FetchMarkets(request) = &actions[0] else { unreachable!() };
//! assert!(request.url.contains("vs_currency=eur"));
//! # Ok::<(), coinpane::CoinpaneError>(())
//! ```

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod market;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, LoadState, SearchFocus};
pub use domain::{CoinpaneError, Coin, Currency, Result};
pub use ui::Theme;

use engine::ViewParameters;
use infrastructure::expand_tilde;
use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's layout options.
///
/// ```kdl
/// plugin location="file:/path/to/coinpane.wasm" {
///     currency "eur"
///     theme "catppuccin-mocha"
///     theme_file "~/.config/coinpane/theme.toml"
///     trace_level "info"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Initial display currency. Default: EUR
    pub currency: Currency,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme, already mapped into the sandbox.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses the configuration map Zellij passes to `load`.
    ///
    /// Unknown keys are ignored and an unrecognised currency falls back to
    /// the default.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use coinpane::{Config, Currency};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("currency".to_string(), "USD".to_string());
    /// map.insert("theme_file".to_string(), "~/theme.toml".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.currency, Currency::Usd);
    /// assert_eq!(config.theme_file.as_deref(), Some("/host/theme.toml"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let currency = config.get("currency").map_or_else(Currency::default, |raw| {
            raw.parse().unwrap_or_else(|e| {
                tracing::debug!(currency = %raw, error = %e, "invalid currency, using default");
                Currency::default()
            })
        });

        Self {
            currency,
            theme_name: non_blank(config.get("theme")),
            theme_file: non_blank(config.get("theme_file")).map(|path| expand_tilde(&path)),
            trace_level: non_blank(config.get("trace_level")),
        }
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Builds the initial [`AppState`]: theme resolved from file, then name, then
/// the default, and the view parameters seeded with the configured currency.
/// No data is loaded until permissions are granted.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(currency = %config.currency, "initializing coinpane plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(ViewParameters::with_currency(config.currency), theme)
}
