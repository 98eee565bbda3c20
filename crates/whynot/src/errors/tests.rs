use super::*;
use pretty_assertions::assert_eq;
use whynot_diag::{Severity, Sentinel};

#[test]
fn absent_error_surfaces_diagnostic_text() {
    let err = absent_error(Diagnostic::parse("7sensor offline").unwrap());
    assert_eq!(err.to_string(), "no value present: 7sensor offline");
    assert_eq!(err.diagnostic().severity(), Severity::new(7).unwrap());
    assert_eq!(err.into_diagnostic().message(), "sensor offline");
}

#[test]
fn index_error_on_present_container() {
    let err = index_out_of_bounds(3, 1, None);
    assert_eq!(err.index(), 3);
    assert_eq!(err.sequence_len(), 1);
    assert_eq!(err.diagnostic(), None);
    assert_eq!(err.to_string(), "index 3 out of bounds for sequence of length 1");
}

#[test]
fn index_error_on_absent_container_carries_context() {
    let err = index_out_of_bounds(0, 0, Some(Diagnostic::propagate()));
    assert_eq!(
        err.to_string(),
        "index 0 out of bounds for sequence of length 0 (absent: 1no value)"
    );
    assert_eq!(
        err.diagnostic().map(Diagnostic::sentinel),
        Some(Sentinel::Propagate)
    );
}
