use super::*;
use pretty_assertions::assert_eq;
use whynot_diag::Diagnostic;

fn absent_parsed(text: &str) -> Maybe<i32> {
    Maybe::absent(Diagnostic::parse(text).unwrap())
}

// === Iteration ===

#[test]
fn present_iterates_to_one_element() {
    let m = Maybe::present(7);
    assert_eq!(m.iter().copied().collect::<Vec<_>>(), vec![7]);
}

#[test]
fn absent_iterates_to_nothing() {
    let m = absent_parsed("7broken");
    assert_eq!(m.iter().count(), 0);
    assert!(m.iter().next().is_none());
}

#[test]
fn traversals_are_restartable_and_independent() {
    let m = Maybe::present(7);
    let mut first = m.iter();
    assert_eq!(first.next(), Some(&7));
    assert_eq!(first.next(), None);

    // A fresh traversal is unaffected by the exhausted one.
    assert_eq!(m.iter().next(), Some(&7));
}

#[test]
fn iteration_never_fails_and_is_fused() {
    let mut it = absent_parsed("7broken").into_iter();
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn owned_iteration_consumes_the_container() {
    let collected: Vec<i32> = Maybe::present(7).into_iter().collect();
    assert_eq!(collected, vec![7]);
}

#[test]
fn borrowing_for_loop_works() {
    let m = Maybe::present(7);
    let mut seen = Vec::new();
    for v in &m {
        seen.push(*v);
    }
    assert_eq!(seen, vec![7]);
}

#[test]
fn double_ended_and_exact_size() {
    let m = Maybe::present(7);
    assert_eq!(m.iter().len(), 1);
    assert_eq!(m.iter().next_back(), Some(&7));
    assert_eq!(absent_parsed("1x").iter().len(), 0);
}

// === Length ===

#[test]
fn len_is_zero_or_one() {
    assert_eq!(Maybe::present(7).len(), 1);
    assert!(!Maybe::present(7).is_empty());
    assert_eq!(absent_parsed("1x").len(), 0);
    assert!(absent_parsed("1x").is_empty());
}

// === Indexed access ===

#[test]
fn index_zero_on_present_yields_the_payload() {
    assert_eq!(Maybe::present(7).at(0), Ok(&7));
}

#[test]
fn index_past_the_end_faults() {
    let err = Maybe::present(7).at(1).unwrap_err();
    assert_eq!(err.index(), 1);
    assert_eq!(err.sequence_len(), 1);
    assert_eq!(err.diagnostic(), None);
}

#[test]
fn any_index_on_absent_faults_with_context() {
    let m = absent_parsed("7broken");
    let err = m.at(0).unwrap_err();
    assert_eq!(err.sequence_len(), 0);
    assert_eq!(err.diagnostic().map(Diagnostic::message), Some("broken"));
    assert!(err.to_string().contains("7broken"));
}
