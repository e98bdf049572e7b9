//! Event handling and state transition logic.
//!
//! [`handle_event`] is the one place where [`AppState`] changes. It receives
//! user input already translated from key presses, plus market responses and
//! permission results from the plugin runtime, and returns whether to
//! re-render along with the side effects to run.
//!
//! # Event Types
//!
//! - **Navigation**: `KeyDown`, `KeyUp`, `CloseFocus`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`,
//!   `Char`, `Backspace`, `Escape`
//! - **View**: `SortBy`, `SetCurrency`, `ToggleCurrency`, `Refresh`
//! - **System**: `PermissionsGranted`, `PermissionsDenied`, `MarketResponse`
//!
//! # Example
//!
//! ```rust
//! use coinpane::app::{handle_event, Action, AppState, Event};
//! use coinpane::engine::ViewParameters;
//! use coinpane::ui::Theme;
//!
//! let mut state = AppState::new(ViewParameters::default(), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::PermissionsGranted)?;
//! assert!(matches!(actions.as_slice(), [Action::FetchMarkets(_)]));
//! # Ok::<(), coinpane::CoinpaneError>(())
//! ```

use super::modes::{InputMode, LoadState, SearchFocus};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{Currency, MarketSnapshot};
use crate::engine::SortKey;
use crate::market::{FetchOutcome, MarketResponse};
use chrono::{DateTime, Local};

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves selection cursor down by one position (wraps to top).
    KeyDown,
    /// Moves selection cursor up by one position (wraps to bottom).
    KeyUp,
    /// Closes the floating pane and hides the plugin UI.
    CloseFocus,
    /// Enters search mode with typing focus.
    SearchMode,
    /// Focuses the search input field (from navigating mode).
    FocusSearchBar,
    /// Focuses the search results (from typing mode), keeping the query.
    FocusResults,
    /// Exits search mode and clears the query.
    ExitSearch,
    /// Appends a character to the search query.
    Char(char),
    /// Removes the last character from the search query.
    Backspace,
    /// Clears search query and returns to normal mode.
    Escape,

    /// Selects a sort column; the active column flips direction.
    SortBy(SortKey),
    /// Switches the display currency, fetching new prices.
    SetCurrency(Currency),
    /// Switches to the other display currency.
    ToggleCurrency,
    /// Re-fetches prices in the current currency.
    Refresh,

    /// Web access was granted; the initial fetch can start.
    PermissionsGranted,
    /// Web access was refused; nothing can be fetched.
    PermissionsDenied,

    /// Result of a market request, with the local time it arrived.
    MarketResponse {
        response: MarketResponse,
        received_at: DateTime<Local>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the plugin shim.
///
/// # Errors
///
/// Currently every event is handled infallibly; the `Result` keeps the handler
/// signature stable for fallible events.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::SearchMode => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            state.params.search_text.clear();
            state.selected_index = 0;
            Ok((true, vec![]))
        }
        Event::FocusSearchBar => {
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.params.search_text.trim().is_empty() {
                state.clear_search();
                return Ok((true, vec![]));
            }

            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch | Event::Escape => {
            tracing::debug!(query = %state.params.search_text, "exiting search mode");
            state.clear_search();
            Ok((true, vec![]))
        }
        Event::Char(c) => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.params.search_text.push(*c);
            state.selected_index = 0;

            tracing::trace!(query = %state.params.search_text, char = %c, "search query updated");

            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !matches!(state.input_mode, InputMode::Search(_)) {
                return Ok((false, vec![]));
            }

            state.params.search_text.pop();
            state.selected_index = 0;

            Ok((true, vec![]))
        }
        Event::SortBy(key) => {
            state.params.select_sort(*key);
            tracing::debug!(
                sort_key = ?state.params.sort_key,
                sort_direction = ?state.params.sort_direction,
                "sort changed"
            );
            Ok((true, vec![]))
        }
        Event::SetCurrency(currency) => Ok(switch_currency(state, *currency)),
        Event::ToggleCurrency => {
            let next = state.params.currency.toggled();
            Ok(switch_currency(state, next))
        }
        Event::Refresh => {
            if state.load_state.is_busy() {
                tracing::debug!(load_state = ?state.load_state, "refresh ignored, fetch outstanding");
                return Ok((false, vec![]));
            }

            tracing::debug!(currency = %state.params.currency, "manual refresh");
            let action = state.begin_fetch(LoadState::Refreshing);
            Ok((true, vec![action]))
        }
        Event::PermissionsGranted => {
            tracing::debug!(currency = %state.params.currency, "permissions granted, starting initial fetch");
            let action = state.begin_fetch(LoadState::Loading);
            Ok((true, vec![action]))
        }
        Event::PermissionsDenied => {
            tracing::warn!("web access permission denied, market data unavailable");
            state.load_state = LoadState::Idle;
            Ok((true, vec![]))
        }
        Event::MarketResponse { response, received_at } => {
            match state.client.resolve(response) {
                FetchOutcome::Stale => Ok((false, vec![])),
                FetchOutcome::Loaded { currency, coins } => {
                    tracing::debug!(
                        currency = %currency,
                        coin_count = coins.len(),
                        "market snapshot replaced"
                    );
                    state.snapshot = Some(MarketSnapshot::new(currency, coins, *received_at));
                    state.load_state = LoadState::Idle;
                    Ok((true, vec![]))
                }
                FetchOutcome::Failed(failure) => {
                    tracing::warn!(
                        error = %failure,
                        currency = %state.params.currency,
                        "market fetch failed, keeping previous snapshot"
                    );
                    state.load_state = LoadState::Idle;
                    Ok((true, vec![]))
                }
            }
        }
    }
}

fn switch_currency(state: &mut AppState, currency: Currency) -> (bool, Vec<Action>) {
    if state.params.currency == currency {
        return (false, vec![]);
    }

    tracing::debug!(from = %state.params.currency, to = %currency, "switching currency");
    state.params.currency = currency;
    state.selected_index = 0;
    let action = state.begin_fetch(LoadState::Loading);
    (true, vec![action])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{SortDirection, ViewParameters};
    use crate::market::MarketRequest;
    use crate::ui::Theme;

    fn state() -> AppState {
        AppState::new(ViewParameters::default(), Theme::default())
    }

    fn fetch_request(actions: &[Action]) -> MarketRequest {
        match actions {
            [Action::FetchMarkets(request)] => request.clone(),
            other => panic!("expected one fetch, got {other:?}"),
        }
    }

    fn ok_response(request: &MarketRequest, body: &str) -> Event {
        Event::MarketResponse {
            response: MarketResponse {
                status: 200,
                body: body.as_bytes().to_vec(),
                context: request.context(),
            },
            received_at: Local::now(),
        }
    }

    const ONE_COIN: &str = r#"[{"id":"bitcoin","symbol":"btc","name":"Bitcoin","image":"","current_price":50000,"market_cap":900000,"price_change_percentage_24h":2.5}]"#;

    #[test]
    fn typing_only_edits_query_in_search_mode() {
        let mut state = state();
        let (render, _) = handle_event(&mut state, &Event::Char('b')).unwrap();
        assert!(!render);
        assert!(state.params.search_text.is_empty());

        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('b')).unwrap();
        handle_event(&mut state, &Event::Char('t')).unwrap();
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.params.search_text, "b");
    }

    #[test]
    fn focus_results_keeps_query_and_escape_clears_it() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::Char('e')).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Search(SearchFocus::Navigating));
        assert_eq!(state.params.search_text, "e");

        handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
        assert!(state.params.search_text.is_empty());
    }

    #[test]
    fn focus_results_with_blank_query_leaves_search() {
        let mut state = state();
        handle_event(&mut state, &Event::SearchMode).unwrap();
        handle_event(&mut state, &Event::FocusResults).unwrap();
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn sort_by_toggles_same_key() {
        let mut state = state();
        handle_event(&mut state, &Event::SortBy(SortKey::Price)).unwrap();
        assert_eq!(state.params.sort_direction, SortDirection::Descending);
        handle_event(&mut state, &Event::SortBy(SortKey::Price)).unwrap();
        assert_eq!(state.params.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn selecting_current_currency_is_a_no_op() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::SetCurrency(Currency::Eur)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.load_state, LoadState::Idle);
    }

    #[test]
    fn toggle_currency_fetches_the_other_one() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ToggleCurrency).unwrap();
        let request = fetch_request(&actions);
        assert_eq!(request.currency, Currency::Usd);
        assert_eq!(state.load_state, LoadState::Loading);
    }

    #[test]
    fn refresh_is_ignored_while_fetching() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted).unwrap();
        let request = fetch_request(&actions);

        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &ok_response(&request, ONE_COIN)).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Refresh).unwrap();
        assert_eq!(fetch_request(&actions).currency, Currency::Eur);
        assert_eq!(state.load_state, LoadState::Refreshing);
    }

    #[test]
    fn permission_denied_stays_idle_without_fetch() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::PermissionsDenied).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.load_state, LoadState::Idle);
        assert!(state.snapshot.is_none());
    }

    #[test]
    fn close_focus_emits_action_without_render() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
