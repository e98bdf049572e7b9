//! End-to-end flows through `handle_event`, with web responses simulated.

use chrono::{Local, TimeZone};
use coinpane::engine::{SortDirection, SortKey};
use coinpane::market::{MarketRequest, MarketResponse};
use coinpane::{handle_event, initialize, Action, AppState, Config, Currency, Event, LoadState};

const EUR_MARKETS: &str = r#"[
    {"id":"bitcoin","symbol":"btc","name":"Bitcoin","image":"https://img/btc.png","current_price":50000,"market_cap":1000000000000,"price_change_percentage_24h":2.5,"total_volume":1},
    {"id":"ethereum","symbol":"eth","name":"Ether","image":"https://img/eth.png","current_price":3000,"market_cap":400000000000,"price_change_percentage_24h":-1.0},
    {"id":"tether","symbol":"usdt","name":"Tether","image":"https://img/usdt.png","current_price":0.92,"market_cap":90000000000,"price_change_percentage_24h":null}
]"#;

const USD_MARKETS: &str = r#"[
    {"id":"bitcoin","symbol":"btc","name":"Bitcoin","image":"https://img/btc.png","current_price":54000,"market_cap":1080000000000,"price_change_percentage_24h":2.4},
    {"id":"ethereum","symbol":"eth","name":"Ether","image":"https://img/eth.png","current_price":3240,"market_cap":432000000000,"price_change_percentage_24h":-1.1}
]"#;

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    let (_render, actions) = handle_event(state, &event).unwrap();
    actions
}

fn single_fetch(actions: &[Action]) -> MarketRequest {
    match actions {
        [Action::FetchMarkets(request)] => request.clone(),
        other => panic!("expected exactly one fetch, got {other:?}"),
    }
}

fn response(request: &MarketRequest, status: u16, body: &str) -> Event {
    Event::MarketResponse {
        response: MarketResponse {
            status,
            body: body.as_bytes().to_vec(),
            context: request.context(),
        },
        received_at: Local.with_ymd_and_hms(2024, 5, 1, 9, 15, 0).unwrap(),
    }
}

/// A state that has completed its first EUR load.
fn loaded_eur() -> AppState {
    let mut state = initialize(&Config::default());
    let request = single_fetch(&send(&mut state, Event::PermissionsGranted));
    send(&mut state, response(&request, 200, EUR_MARKETS));
    state
}

fn names(state: &AppState) -> Vec<String> {
    state
        .derived_view()
        .rows
        .iter()
        .map(|coin| coin.name.clone())
        .collect()
}

#[test]
fn initial_load_fills_dashboard() {
    let mut state = initialize(&Config::default());
    let request = single_fetch(&send(&mut state, Event::PermissionsGranted));
    assert!(request.url.contains("vs_currency=eur"));
    assert_eq!(state.load_state, LoadState::Loading);

    send(&mut state, response(&request, 200, EUR_MARKETS));

    assert_eq!(state.load_state, LoadState::Idle);
    let vm = state.compute_viewmodel(40, 120);
    assert_eq!(vm.display_items.len(), 3);
    assert_eq!(vm.status.counts.as_deref(), Some("Showing 3 of 3 assets"));
    assert_eq!(vm.status.last_updated.as_deref(), Some("Last updated: 09:15:00"));
    let cards = vm.summary.unwrap();
    assert_eq!(cards.gainer.name, "Bitcoin");
    assert_eq!(cards.loser.name, "Ether");
}

#[test]
fn switching_to_usd_issues_one_fetch_and_replaces_list() {
    let mut state = loaded_eur();

    let request = single_fetch(&send(&mut state, Event::SetCurrency(Currency::Usd)));
    assert!(request.url.contains("vs_currency=usd"));
    assert_eq!(request.currency, Currency::Usd);

    send(&mut state, response(&request, 200, USD_MARKETS));

    let snapshot = state.snapshot.as_ref().unwrap();
    assert_eq!(snapshot.currency, Currency::Usd);
    assert_eq!(snapshot.coins.len(), 2);
    assert_eq!(snapshot.coins[0].current_price, 54000.0);
    assert!(state.compute_viewmodel(40, 120).display_items[0].price.starts_with('$'));
}

#[test]
fn failed_switch_keeps_previous_snapshot() {
    let mut state = loaded_eur();
    let before = state.snapshot.clone();

    let request = single_fetch(&send(&mut state, Event::SetCurrency(Currency::Usd)));
    send(&mut state, response(&request, 503, "service unavailable"));

    assert_eq!(state.snapshot, before);
    assert_eq!(state.load_state, LoadState::Idle);
    assert_eq!(state.params.currency, Currency::Usd);
    // Prices stay labelled with the currency they were fetched in.
    assert!(state.compute_viewmodel(40, 120).display_items[0].price.starts_with('€'));
}

#[test]
fn malformed_body_keeps_previous_snapshot() {
    let mut state = loaded_eur();
    let before = state.snapshot.clone();

    let request = single_fetch(&send(&mut state, Event::Refresh));
    assert_eq!(state.load_state, LoadState::Refreshing);
    send(&mut state, response(&request, 200, r#"{"status":{"error_code":429}}"#));

    assert_eq!(state.snapshot, before);
    assert_eq!(state.load_state, LoadState::Idle);
}

#[test]
fn superseded_response_is_discarded() {
    let mut state = loaded_eur();

    let usd = single_fetch(&send(&mut state, Event::ToggleCurrency));
    let eur = single_fetch(&send(&mut state, Event::ToggleCurrency));
    assert_ne!(usd.id, eur.id);

    // The slow USD response arrives after the user went back to EUR.
    let (render, actions) = handle_event(&mut state, &response(&usd, 200, USD_MARKETS)).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
    assert_eq!(state.snapshot.as_ref().unwrap().currency, Currency::Eur);
    assert_eq!(state.load_state, LoadState::Loading);

    send(&mut state, response(&eur, 200, EUR_MARKETS));
    assert_eq!(state.load_state, LoadState::Idle);
    assert_eq!(state.snapshot.as_ref().unwrap().coins.len(), 3);
}

#[test]
fn refresh_is_ignored_while_fetch_outstanding() {
    let mut state = initialize(&Config::default());
    send(&mut state, Event::PermissionsGranted);

    assert!(send(&mut state, Event::Refresh).is_empty());
}

#[test]
fn selecting_current_currency_does_nothing() {
    let mut state = loaded_eur();
    let (render, actions) = handle_event(&mut state, &Event::SetCurrency(Currency::Eur)).unwrap();
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn search_then_sort_narrows_and_orders_rows() {
    let mut state = loaded_eur();

    send(&mut state, Event::SearchMode);
    for c in "t".chars() {
        send(&mut state, Event::Char(c));
    }
    // "t" matches Bitcoin (name), Ether (name, symbol) and Tether.
    assert_eq!(names(&state).len(), 3);

    send(&mut state, Event::Char('h'));
    assert_eq!(names(&state), ["Ether", "Tether"]);

    send(&mut state, Event::FocusResults);
    send(&mut state, Event::SortBy(SortKey::Price));
    assert_eq!(state.params.sort_direction, SortDirection::Descending);
    assert_eq!(names(&state), ["Ether", "Tether"]);

    send(&mut state, Event::SortBy(SortKey::Price));
    assert_eq!(names(&state), ["Tether", "Ether"]);

    let vm = state.compute_viewmodel(40, 120);
    assert_eq!(vm.status.counts.as_deref(), Some("Showing 2 of 3 assets"));
    // Cards always cover the full snapshot.
    assert_eq!(vm.summary.unwrap().gainer.name, "Bitcoin");

    send(&mut state, Event::ExitSearch);
    assert_eq!(names(&state).len(), 3);
}

#[test]
fn missing_change_sorts_last_both_ways() {
    let mut state = loaded_eur();

    send(&mut state, Event::SortBy(SortKey::Change24h));
    assert_eq!(names(&state), ["Bitcoin", "Ether", "Tether"]);

    send(&mut state, Event::SortBy(SortKey::Change24h));
    assert_eq!(names(&state), ["Ether", "Bitcoin", "Tether"]);
}

#[test]
fn permission_denied_leaves_empty_dashboard() {
    let mut state = initialize(&Config::default());
    assert!(send(&mut state, Event::PermissionsDenied).is_empty());

    let vm = state.compute_viewmodel(40, 120);
    assert!(vm.display_items.is_empty());
    assert_eq!(vm.empty_state.unwrap().message, "No market data available.");
}
