//! Lifting scalar operators over containers.
//!
//! [`lift2`] generalizes a scalar binary operator to operate across any
//! combination of present and absent operands, propagating absence instead of
//! raising and merging diagnostics by severity dominance when both sides are
//! absent. Raw scalars lift via `From`: `lift2(op, 2.into(), m)`.
//!
//! The operator is only ever invoked when both operands are present, with the
//! argument order preserved; no merge branch can surface a usable value.

use whynot_diag::{Diagnostic, Severity};

use crate::Maybe;

/// Lift a binary operator over two containers, using the default warning
/// threshold ([`Severity::DEFAULT_THRESHOLD`]) for the both-absent merge.
pub fn lift2<T, U, V>(op: impl FnOnce(T, U) -> V, left: Maybe<T>, right: Maybe<U>) -> Maybe<V> {
    lift2_with(Severity::DEFAULT_THRESHOLD, op, left, right)
}

/// Lift a binary operator with an explicit warning threshold.
///
/// - Both present: `Present(op(left, right))`.
/// - One absent: absent, carrying the absent side's diagnostic; `op` is not
///   invoked.
/// - Both absent: absent, carrying the merge of the two diagnostics. The
///   dominant one (severity total order, message as tie-break) decides
///   severity and sentinel; above `threshold` it propagates verbatim, at or
///   below the merged message records both operands, dominant first. See
///   [`Diagnostic::merge`]. Sub-threshold absence never heals into a value.
pub fn lift2_with<T, U, V>(
    threshold: Severity,
    op: impl FnOnce(T, U) -> V,
    left: Maybe<T>,
    right: Maybe<U>,
) -> Maybe<V> {
    match (left, right) {
        (Maybe::Present(l), Maybe::Present(r)) => Maybe::Present(op(l, r)),
        (Maybe::Present(_), Maybe::Absent(d)) | (Maybe::Absent(d), Maybe::Present(_)) => {
            Maybe::Absent(d)
        }
        (Maybe::Absent(l), Maybe::Absent(r)) => {
            tracing::trace!(left = %l, right = %r, threshold = %threshold, "merging absent operands");
            Maybe::Absent(Diagnostic::merge(l, r, threshold))
        }
    }
}

/// Lift a unary operator over one container.
///
/// Absence propagates the diagnostic unchanged; `op` is not invoked.
pub fn lift1<T, U>(op: impl FnOnce(T) -> U, operand: Maybe<T>) -> Maybe<U> {
    operand.map(op)
}
