//! Input and loading mode state types for the application.
//!
//! # State Machine
//!
//! The application operates in one of two input modes:
//! - **Normal**: navigation, sorting, currency, and refresh keys
//! - **Search**: active search with typing or result navigation focus
//!
//! Independently, [`LoadState`] tracks whether a market fetch is outstanding
//! and how the UI should present it.
//!
//! # Example
//!
//! ```rust
//! use coinpane::app::modes::{InputMode, LoadState, SearchFocus};
//!
//! let input_mode = InputMode::Search(SearchFocus::Typing);
//! assert!(LoadState::Loading.is_busy());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    ///
    /// Accepts character input, backspace, and enter (to switch to Navigating).
    Typing,

    /// User is navigating through filtered search results.
    ///
    /// Accepts j/k for movement, sort and currency keys, and / to return to Typing.
    Navigating,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and how user input is processed.
/// Determines the displayed footer text and available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search mode with focus state.
    Search(SearchFocus),
}

/// Market fetch progress as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No fetch outstanding.
    #[default]
    Idle,

    /// First load or a currency switch. The table and summary cards are
    /// replaced by a loading message until the response arrives.
    Loading,

    /// Manual refresh. The current table stays visible and the header shows
    /// a refresh indicator.
    Refreshing,
}

impl LoadState {
    /// Whether a fetch is outstanding.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        !matches!(self, Self::Idle)
    }
}
