use super::*;

#[test]
fn new_without_relay_keeps_limits() {
    let limits = RateLimitConfig { per_client_limit: 2, ..RateLimitConfig::default() };
    let state = AppState::new(None, limits);
    assert!(state.relay.is_none());
    assert_eq!(state.rate_limiter.config(), limits);
}

#[test]
fn clones_share_rate_limiter_windows() {
    let limits = RateLimitConfig { per_client_limit: 1, ..RateLimitConfig::default() };
    let state = test_helpers::test_app_state();
    let state = AppState::new(state.relay, limits);
    let clone = state.clone();
    let client = std::net::IpAddr::from([127, 0, 0, 1]);

    state.rate_limiter.check_and_record(client).unwrap();
    assert!(clone.rate_limiter.check_and_record(client).is_err());
}
