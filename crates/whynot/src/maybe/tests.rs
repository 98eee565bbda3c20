use super::*;
use pretty_assertions::assert_eq;
use std::collections::hash_map::DefaultHasher;
use whynot_diag::Severity;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn absent_parsed(text: &str) -> Maybe<i32> {
    Maybe::absent(Diagnostic::parse(text).unwrap())
}

// === Construction and accessors ===

#[test]
fn present_holds_the_value() {
    let m = Maybe::present(5);
    assert!(m.is_present());
    assert!(!m.is_absent());
    assert_eq!(m.diagnostic(), None);
}

#[test]
fn absent_holds_the_diagnostic() {
    let m = absent_parsed("7broken");
    assert!(m.is_absent());
    assert!(!m.is_present());
    assert_eq!(m.diagnostic().map(Diagnostic::message), Some("broken"));
    assert_eq!(
        m.diagnostic().map(Diagnostic::severity),
        Severity::new(7).ok()
    );
}

#[test]
fn empty_uses_the_default_sentinel() {
    // The process default is Propagate (see config tests).
    let m: Maybe<i32> = Maybe::empty();
    assert!(m.is_absent());
    assert_eq!(
        m.diagnostic().map(Diagnostic::sentinel),
        Some(Sentinel::Propagate)
    );
}

#[test]
fn absent_with_picks_canonical_diagnostics() {
    let p: Maybe<i32> = Maybe::absent_with(Sentinel::Propagate);
    assert_eq!(p.diagnostic().map(Diagnostic::severity), Some(Severity::MIN_ABSENT));

    let q: Maybe<i32> = Maybe::absent_with(Sentinel::Poison);
    assert_eq!(q.diagnostic().map(Diagnostic::severity), Some(Severity::MAX));
}

#[test]
fn from_option_bridges_std() {
    assert_eq!(Maybe::from_option(Some(3), Diagnostic::propagate()), Maybe::present(3));
    let m: Maybe<i32> = Maybe::from_option(None, Diagnostic::propagate());
    assert!(m.is_absent());
}

#[test]
fn from_value_is_present() {
    assert_eq!(Maybe::from(5), Maybe::present(5));
}

#[test]
fn as_ref_borrows_the_payload() {
    let m = Maybe::present(5);
    assert_eq!(m.as_ref(), Maybe::present(&5));
    assert!(absent_parsed("7broken").as_ref().is_absent());
}

// === Relaxed accessors ===

#[test]
fn value_or_default_substitutes_the_type_default() {
    assert_eq!(Maybe::present(5).value_or_default(), 5);
    assert_eq!(Maybe::<i32>::empty().value_or_default(), 0);
    assert_eq!(Maybe::<String>::empty().value_or_default(), String::new());
}

#[test]
fn value_or_substitutes_the_fallback() {
    assert_eq!(Maybe::present(5).value_or(9), 5);
    assert_eq!(Maybe::<i32>::empty().value_or(9), 9);
}

#[test]
fn value_or_else_is_lazy() {
    let mut calls = 0;
    let v = Maybe::present(5).value_or_else(|| {
        calls += 1;
        0
    });
    assert_eq!(v, 5);
    assert_eq!(calls, 0);

    let mut calls = 0;
    let v = Maybe::<i32>::empty().value_or_else(|| {
        calls += 1;
        9
    });
    assert_eq!(v, 9);
    assert_eq!(calls, 1);
}

// === Strict accessors ===

#[test]
fn try_value_extracts_or_faults() {
    assert_eq!(Maybe::present(5).try_value(), Ok(5));

    let err = absent_parsed("7broken").try_value().unwrap_err();
    assert_eq!(err.to_string(), "no value present: 7broken");
}

#[test]
fn try_value_or_else_uses_the_caller_fault() {
    let ok: Result<i32, String> = Maybe::present(5).try_value_or_else(|d| d.to_string());
    assert_eq!(ok, Ok(5));

    let err: Result<i32, String> = absent_parsed("7broken").try_value_or_else(|d| d.to_string());
    assert_eq!(err, Err("7broken".to_owned()));
}

// === Equality ===

#[test]
fn present_equality_follows_the_payload() {
    assert_eq!(Maybe::present(5), Maybe::present(5));
    assert_ne!(Maybe::present(5), Maybe::present(6));
}

#[test]
fn present_never_equals_absent() {
    assert_ne!(Maybe::present(5), Maybe::<i32>::empty());
    assert_ne!(Maybe::<i32>::empty(), Maybe::present(5));
}

#[test]
fn absence_never_equals_a_raw_value() {
    assert_eq!(Maybe::present(5), 5);
    assert_ne!(Maybe::present(5), 6);
    assert_ne!(Maybe::<i32>::empty(), 5);
}

#[test]
fn propagate_absences_compare_equal() {
    // The free-text suffix and severity do not govern; the sentinel does.
    assert_eq!(absent_parsed("2first"), absent_parsed("7second"));
}

#[test]
fn poison_absences_never_compare_equal() {
    let a: Maybe<i32> = Maybe::absent_with(Sentinel::Poison);
    let b = a.clone();
    assert_ne!(a, b);

    // Poison on either side contaminates the comparison.
    let p: Maybe<i32> = Maybe::absent_with(Sentinel::Propagate);
    assert_ne!(a, p);
    assert_ne!(p, b);
}

#[test]
fn eq_with_uses_the_supplied_comparer() {
    let a = Maybe::present("HELLO".to_owned());
    let b = Maybe::present("hello".to_owned());
    assert_ne!(a, b);
    assert!(a.eq_with(&b, |x, y| x.eq_ignore_ascii_case(y)));

    // Absent operands still follow the sentinel policy.
    let p: Maybe<String> = Maybe::absent_with(Sentinel::Propagate);
    let q: Maybe<String> = Maybe::absent_with(Sentinel::Poison);
    assert!(p.eq_with(&p.clone(), |_, _| true));
    assert!(!q.eq_with(&q.clone(), |_, _| true));
}

// === Hashing ===

#[test]
fn present_hashes_by_payload() {
    assert_eq!(hash_of(&Maybe::present(5)), hash_of(&Maybe::present(5)));
    assert_ne!(hash_of(&Maybe::present(5)), hash_of(&Maybe::present(6)));
}

#[test]
fn absent_hashes_to_one_constant_per_sentinel() {
    // Message and severity do not feed the hash, keeping hash/eq consistent
    // under Propagate.
    assert_eq!(
        hash_of(&absent_parsed("2first")),
        hash_of(&absent_parsed("7second"))
    );
    assert_ne!(
        hash_of(&Maybe::<i32>::absent_with(Sentinel::Propagate)),
        hash_of(&Maybe::<i32>::absent_with(Sentinel::Poison))
    );
}

// === Display ===

#[test]
fn display_shows_value_or_diagnostic() {
    assert_eq!(Maybe::present(5).to_string(), "5");
    assert_eq!(absent_parsed("7broken").to_string(), "<absent: 7broken>");
}
