use super::*;

#[test]
fn online_by_default_shows_nothing() {
    let state = NetworkState::default();
    assert_eq!(state.status, Connectivity::Online);
    assert_eq!(state.banner(), None);
}

#[test]
fn offline_shows_offline_banner() {
    let mut state = NetworkState::default();
    state.go_offline();
    let (class, _) = state.banner().unwrap_or_default();
    assert_eq!(class, "network-banner--offline");
}

#[test]
fn reconnect_after_offline_shows_transient_banner() {
    let mut state = NetworkState::with_status(false);
    let generation = state.go_online();
    assert!(generation.is_some());
    assert_eq!(state.banner().map(|(_, text)| text), Some("Back online"));

    state.dismiss_reconnected(generation.unwrap_or_default());
    assert_eq!(state.banner(), None);
}

#[test]
fn online_event_while_online_needs_no_dismiss() {
    let mut state = NetworkState::default();
    assert_eq!(state.go_online(), None);
    assert!(!state.show_reconnected);
}

#[test]
fn stale_dismiss_timer_is_ignored() {
    let mut state = NetworkState::with_status(false);
    let first = state.go_online().unwrap_or_default();
    state.go_offline();
    let second = state.go_online().unwrap_or_default();
    state.dismiss_reconnected(first);
    assert!(state.show_reconnected);
    state.dismiss_reconnected(second);
    assert!(!state.show_reconnected);
}

#[test]
fn sync_states_have_banner_copy() {
    let syncing = NetworkState { status: Connectivity::Syncing, ..NetworkState::default() };
    let failed = NetworkState { status: Connectivity::SyncError, ..NetworkState::default() };
    assert!(syncing.banner().is_some());
    assert!(failed.banner().is_some());
}
