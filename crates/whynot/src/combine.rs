//! Transforming combinators.
//!
//! Every combinator consumes its input and returns a valid (possibly absent)
//! container; none of them can fail. Closures are only invoked on the side of
//! the container that is actually populated — absence propagates without
//! touching user code.

use std::fmt;

use whynot_diag::Diagnostic;

use crate::Maybe;

impl<T> Maybe<T> {
    /// Apply `f` to the payload when present.
    ///
    /// When absent, the diagnostic propagates unchanged into the re-typed
    /// container and `f` is never invoked.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Present(v) => Maybe::Present(f(v)),
            Maybe::Absent(d) => Maybe::Absent(d),
        }
    }

    /// Monadic bind: chain a computation that may itself come up absent.
    ///
    /// When absent, the diagnostic propagates unchanged and `f` is never
    /// invoked.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Present(v) => f(v),
            Maybe::Absent(d) => Maybe::Absent(d),
        }
    }

    /// Dispatch to exactly one handler, synchronously, exactly once.
    pub fn visit<R>(
        self,
        on_present: impl FnOnce(T) -> R,
        on_absent: impl FnOnce(Diagnostic) -> R,
    ) -> R {
        match self {
            Maybe::Present(v) => on_present(v),
            Maybe::Absent(d) => on_absent(d),
        }
    }

    /// Side-effecting dispatch returning the original container unchanged,
    /// for fluent chaining. The matching handler runs exactly once.
    pub fn inspect(self, on_present: impl FnOnce(&T), on_absent: impl FnOnce(&Diagnostic)) -> Self {
        match &self {
            Maybe::Present(v) => on_present(v),
            Maybe::Absent(d) => on_absent(d),
        }
        self
    }

    /// Predicate gate: keep the container unchanged when absent or when
    /// `predicate` admits the payload; otherwise absent with a synthesized
    /// diagnostic embedding the rejected value.
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self
    where
        T: fmt::Debug,
    {
        match self {
            Maybe::Present(v) if !predicate(&v) => {
                Maybe::Absent(Diagnostic::filtered(format!("value {v:?} failed predicate")))
            }
            other => other,
        }
    }

    /// Inverted predicate gate: rejects the payload when `predicate` holds.
    pub fn reject(self, predicate: impl FnOnce(&T) -> bool) -> Self
    where
        T: fmt::Debug,
    {
        match self {
            Maybe::Present(v) if predicate(&v) => Maybe::Absent(Diagnostic::filtered(format!(
                "value {v:?} matched rejected predicate"
            ))),
            other => other,
        }
    }
}
