use super::*;

// The default sentinel is set-once per process, so every assertion about it
// lives in this single test. Other tests in this binary only read it, and
// the one value ever written here matches the unset fallback.
#[test]
fn default_sentinel_is_set_once() {
    assert_eq!(default_sentinel(), Sentinel::Propagate);
    assert!(set_default_sentinel(Sentinel::Propagate));

    // Second initialization is rejected; the first selection stays.
    assert!(!set_default_sentinel(Sentinel::Poison));
    assert_eq!(default_sentinel(), Sentinel::Propagate);
}
