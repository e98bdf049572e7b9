//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the coinpane library and the Zellij plugin
//! system. Key presses, web request results and permission results are
//! translated into library [`Event`]s; the library's [`Action`]s are carried
//! out through the Zellij API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `PermissionRequestResult`
//! 3. **Permissions granted**: Issue the first markets request
//! 4. **Update**: Translate events, delegate to `handle_event`, run actions
//! 5. **Render**: Call the library render function
//!
//! # Keybindings
//!
//! Global (all modes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! In normal mode:
//! - `j`/`Down`, `k`/`Up`: Navigate
//! - `/`: Search
//! - `n`/`p`/`m`/`c`: Sort by name, price, market cap, 24h change
//! - `e`/`u`/`t`: EUR, USD, toggle currency
//! - `r`: Refresh
//! - `q`: Close plugin
//!
//! While typing a search:
//! - Any character: Type
//! - `Enter`: Browse results
//! - `Esc`: Exit search
//!
//! While browsing search results:
//! - `j`/`k`: Navigate
//! - `/`: Edit query
//! - Sort and currency keys as in normal mode
//! - `Esc`: Exit search

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
zellij_tile::register_plugin!(plugin::State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("coinpane is a Zellij plugin; build it for wasm32-wasip1 and load it from a layout");
}

#[cfg(target_family = "wasm")]
mod plugin {
    use chrono::Local;
    use coinpane::engine::SortKey;
    use coinpane::market::{MarketRequest, MarketResponse};
    use coinpane::{handle_event, Action, Config, Currency, Event, InputMode, SearchFocus};
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    /// Plugin state wrapper around the library's `AppState`.
    pub struct State {
        app: coinpane::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: coinpane::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        /// Parses configuration, requests web access and subscribes to events.
        ///
        /// Nothing is fetched until the permission result arrives.
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            coinpane::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();

            tracing::debug!(currency = %config.currency, theme = ?config.theme_name, "parsed configuration");
            self.app = coinpane::initialize(&config);

            request_permission(&[
                PermissionType::WebAccess,
                PermissionType::ReadApplicationState,
            ]);
            subscribe(&[
                EventType::Key,
                EventType::WebRequestResult,
                EventType::PermissionRequestResult,
            ]);

            tracing::debug!("plugin load complete - waiting for permissions");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let event_name = Self::get_event_name(&event);
            let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
            let _guard = span.entered();

            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                    tracing::debug!(status, body_len = body.len(), "web request result");
                    Event::MarketResponse {
                        response: MarketResponse {
                            status,
                            body,
                            context,
                        },
                        received_at: Local::now(),
                    }
                }
                zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                    PermissionStatus::Granted => Event::PermissionsGranted,
                    PermissionStatus::Denied => Event::PermissionsDenied,
                },
                _ => return false,
            };

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render = should_render,
                        "event handled successfully"
                    );
                    for action in &actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            coinpane::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
            match event {
                zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
                zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                    format!("WebRequestResult({status})")
                }
                zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                    "PermissionRequestResult".to_string()
                }
                _ => "Other".to_string(),
            }
        }

        /// Maps a key press to an application event for the current input mode.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, mode = ?self.app.input_mode, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::KeyDown),
                    BareKey::Char('p') => Some(Event::KeyUp),
                    _ => None,
                };
            }

            match self.app.input_mode {
                InputMode::Search(SearchFocus::Typing) => Self::map_typing_key(key.bare_key),
                InputMode::Search(SearchFocus::Navigating) => Self::map_browsing_key(key.bare_key),
                InputMode::Normal => Self::map_normal_key(key.bare_key),
            }
        }

        fn map_typing_key(key: BareKey) -> Option<Event> {
            Some(match key {
                BareKey::Down => Event::KeyDown,
                BareKey::Up => Event::KeyUp,
                BareKey::Enter => Event::FocusResults,
                BareKey::Esc => Event::ExitSearch,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        fn map_browsing_key(key: BareKey) -> Option<Event> {
            match key {
                BareKey::Char('/') => Some(Event::FocusSearchBar),
                BareKey::Esc => Some(Event::ExitSearch),
                BareKey::Backspace => Some(Event::Backspace),
                _ => Self::map_view_key(key),
            }
        }

        fn map_normal_key(key: BareKey) -> Option<Event> {
            match key {
                BareKey::Char('/') => Some(Event::SearchMode),
                BareKey::Char('r') => Some(Event::Refresh),
                BareKey::Char('q') => Some(Event::CloseFocus),
                BareKey::Esc => Some(Event::Escape),
                _ => Self::map_view_key(key),
            }
        }

        /// Navigation, sort and currency keys shared by normal and browsing modes.
        fn map_view_key(key: BareKey) -> Option<Event> {
            Some(match key {
                BareKey::Down | BareKey::Char('j') => Event::KeyDown,
                BareKey::Up | BareKey::Char('k') => Event::KeyUp,
                BareKey::Char('n') => Event::SortBy(SortKey::Name),
                BareKey::Char('p') => Event::SortBy(SortKey::Price),
                BareKey::Char('m') => Event::SortBy(SortKey::MarketCap),
                BareKey::Char('c') => Event::SortBy(SortKey::Change24h),
                BareKey::Char('e') => Event::SetCurrency(Currency::Eur),
                BareKey::Char('u') => Event::SetCurrency(Currency::Usd),
                BareKey::Char('t') => Event::ToggleCurrency,
                _ => return None,
            })
        }

        /// Carries out a library action through the Zellij API.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::FetchMarkets(request) => {
                    tracing::debug!(request_id = request.id, url = %request.url, "issuing markets request");
                    web_request(
                        &request.url,
                        HttpVerb::Get,
                        MarketRequest::headers(),
                        vec![],
                        request.context(),
                    );
                }
            }
        }
    }
}
