use atlassian_learning_mcp::http::engine::{backoff_delay, pseudo_jitter};

#[test]
fn backoff_grows_exponentially() {
    let d1 = backoff_delay(1).as_millis();
    let d2 = backoff_delay(2).as_millis();
    assert!(d2 > d1 / 2);
}

#[test]
fn jitter_stays_within_bounds() {
    for attempt in 1..10 {
        let j = pseudo_jitter(attempt);
        assert!((-0.25..=0.25).contains(&j));
    }
}
