//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! plugin shim executes them in order; the handler itself never touches Zellij
//! APIs.
//!
//! # Example
//!
//! ```rust
//! use coinpane::app::Action;
//! use coinpane::domain::Currency;
//! use coinpane::market::MarketRequest;
//!
//! let actions = vec![Action::FetchMarkets(MarketRequest::new(1, Currency::Usd))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::market::MarketRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    ///
    /// Sent when the user explicitly requests to exit the plugin (e.g., pressing 'q').
    CloseFocus,

    /// Issues a GET against the markets endpoint.
    ///
    /// The request's context map must travel with the web request so the
    /// response can be matched back to it.
    FetchMarkets(MarketRequest),
}
