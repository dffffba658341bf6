use std::net::{IpAddr, Ipv4Addr};

use super::*;

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

fn small_config() -> RateLimitConfig {
    RateLimitConfig {
        per_client_limit: 3,
        per_client_window: Duration::from_secs(60),
        global_limit: 5,
        global_window: Duration::from_secs(120),
    }
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = RateLimiter::new(small_config());
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(ip(1), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 60 })
    );
}

#[test]
fn global_allows_up_to_limit() {
    let rl = RateLimiter::new(small_config());
    let now = Instant::now();

    // Use distinct clients to avoid hitting per-client limit first.
    for i in 0..5 {
        assert!(rl.check_and_record_at(ip(i), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(ip(200), now),
        Err(RateLimitError::GlobalExceeded { limit: 5, window_secs: 120 })
    );
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = RateLimiter::new(small_config());
    let start = Instant::now();

    for _ in 0..3 {
        rl.check_and_record_at(ip(1), start).unwrap();
    }
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let after_window = start + Duration::from_secs(60) + Duration::from_millis(1);
    assert!(rl.check_and_record_at(ip(1), after_window).is_ok());
}

#[test]
fn distinct_clients_do_not_interfere() {
    let rl = RateLimiter::new(small_config());
    let now = Instant::now();

    for _ in 0..3 {
        rl.check_and_record_at(ip(1), now).unwrap();
    }
    assert!(rl.check_and_record_at(ip(1), now).is_err());
    assert!(rl.check_and_record_at(ip(2), now).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = RateLimiter::new(small_config());
    let start = Instant::now();

    for _ in 0..3 {
        rl.check_and_record_at(ip(1), start).unwrap();
    }
    // Hammering while locked out must not push the window forward.
    let later = start + Duration::from_secs(30);
    for _ in 0..10 {
        assert!(rl.check_and_record_at(ip(1), later).is_err());
    }
    assert!(rl.check_and_record_at(ip(1), start + Duration::from_secs(61)).is_ok());
}

#[test]
fn drained_clients_are_forgotten() {
    let rl = RateLimiter::new(small_config());
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(2), start).unwrap();
    assert_eq!(rl.tracked_clients(), 2);

    rl.check_and_record_at(ip(3), start + Duration::from_secs(61)).unwrap();
    assert_eq!(rl.tracked_clients(), 1);
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.per_client_window, Duration::from_secs(600));
    assert_eq!(cfg.global_limit, 50);
    assert_eq!(cfg.global_window, Duration::from_secs(3600));
}
