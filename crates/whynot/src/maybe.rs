//! The optional-with-diagnostic container.

use std::fmt;
use std::hash::{Hash, Hasher};

use whynot_diag::{Diagnostic, Sentinel};

use crate::config;
use crate::errors::{absent_error, AbsentError};

// Fixed hash inputs for absent containers, one per sentinel kind.
const ABSENT_PROPAGATE_HASH: u8 = 0xA5;
const ABSENT_POISON_HASH: u8 = 0x5A;

/// An optional value that remembers why it is absent.
///
/// Either `Present(T)` or `Absent(Diagnostic)` — an explicit sum type, so an
/// absent container holds no stale payload. Instances are immutable: every
/// combinator consumes its input and yields a new container.
///
/// # Equality
///
/// `Present(a) == Present(b)` iff the payloads compare equal (use
/// [`eq_with`](Maybe::eq_with) for a caller-supplied comparer). `Present` vs.
/// `Absent` is always unequal, and absence never equals a raw payload value.
/// Two `Absent` containers are equal iff **both** carry
/// [`Sentinel::Propagate`]; an absence carrying [`Sentinel::Poison`] never
/// compares equal to anything, including itself. That last policy breaks
/// reflexivity exactly like `f64::NAN`, which is why `Maybe<T>` implements
/// `PartialEq` but deliberately not `Eq`.
///
/// # Hashing
///
/// Present containers hash their payload; absent containers hash one fixed
/// constant per sentinel kind. Hash/equality consistency holds under
/// `Propagate`; under `Poison` it is deliberately not required, mirroring the
/// equality policy.
#[derive(Clone, Debug)]
#[must_use = "a Maybe carries either a value or its absence diagnostic and should be consumed"]
pub enum Maybe<T> {
    /// A value is present.
    Present(T),
    /// No value; the diagnostic explains why.
    Absent(Diagnostic),
}

impl<T> Maybe<T> {
    /// Wrap a present value. Always succeeds.
    pub fn present(value: T) -> Self {
        Maybe::Present(value)
    }

    /// An absence carrying `diagnostic`.
    pub fn absent(diagnostic: Diagnostic) -> Self {
        Maybe::Absent(diagnostic)
    }

    /// An absence carrying the canonical diagnostic for `sentinel`.
    pub fn absent_with(sentinel: Sentinel) -> Self {
        match sentinel {
            Sentinel::Propagate => Maybe::Absent(Diagnostic::propagate()),
            Sentinel::Poison => Maybe::Absent(Diagnostic::poison()),
        }
    }

    /// The type-inferred empty literal: absent under the process default
    /// sentinel (see [`set_default_sentinel`](crate::set_default_sentinel)).
    pub fn empty() -> Self {
        Self::absent_with(config::default_sentinel())
    }

    /// Bridge from a std optional; `None` becomes absent with `diagnostic`.
    pub fn from_option(value: Option<T>, diagnostic: Diagnostic) -> Self {
        match value {
            Some(v) => Maybe::Present(v),
            None => Maybe::Absent(diagnostic),
        }
    }

    /// True when a value is present.
    pub const fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    /// True when no value is present. Always the negation of
    /// [`is_present`](Maybe::is_present).
    pub const fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent(_))
    }

    /// The absence diagnostic, when absent.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Maybe::Present(_) => None,
            Maybe::Absent(d) => Some(d),
        }
    }

    /// Borrowing view: `Maybe<&T>` over this container.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(v) => Maybe::Present(v),
            Maybe::Absent(d) => Maybe::Absent(d.clone()),
        }
    }

    /// Relaxed accessor: the payload, or `fallback` when absent.
    pub fn value_or(self, fallback: T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent(_) => fallback,
        }
    }

    /// Relaxed accessor with a lazy fallback.
    ///
    /// The thunk runs only when absent, exactly once.
    pub fn value_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Present(v) => v,
            Maybe::Absent(_) => fallback(),
        }
    }

    /// Relaxed accessor: the payload, or `T::default()` when absent. Never
    /// fails.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    /// Strict accessor: the payload, or a fault carrying the diagnostic.
    pub fn try_value(self) -> Result<T, AbsentError> {
        match self {
            Maybe::Present(v) => Ok(v),
            Maybe::Absent(d) => Err(absent_error(d)),
        }
    }

    /// Strict accessor with a caller-supplied fault factory.
    pub fn try_value_or_else<E>(self, fault: impl FnOnce(&Diagnostic) -> E) -> Result<T, E> {
        match self {
            Maybe::Present(v) => Ok(v),
            Maybe::Absent(d) => Err(fault(&d)),
        }
    }

    /// Equality under a caller-supplied payload comparer.
    ///
    /// The sentinel policy for absent operands is unchanged; only the
    /// present/present case consults `cmp`.
    pub fn eq_with(&self, other: &Self, cmp: impl FnOnce(&T, &T) -> bool) -> bool {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => cmp(a, b),
            (Maybe::Absent(a), Maybe::Absent(b)) => {
                a.sentinel().preserves_identity() && b.sentinel().preserves_identity()
            }
            _ => false,
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        self.eq_with(other, |a, b| a == b)
    }
}

impl<T: PartialEq> PartialEq<T> for Maybe<T> {
    fn eq(&self, other: &T) -> bool {
        matches!(self, Maybe::Present(v) if v == other)
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Maybe::Present(v) => {
                0u8.hash(state);
                v.hash(state);
            }
            Maybe::Absent(d) => {
                1u8.hash(state);
                match d.sentinel() {
                    Sentinel::Propagate => ABSENT_PROPAGATE_HASH.hash(state),
                    Sentinel::Poison => ABSENT_POISON_HASH.hash(state),
                }
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Maybe::Present(v) => write!(f, "{v}"),
            Maybe::Absent(d) => write!(f, "<absent: {d}>"),
        }
    }
}

/// The explicit scalar-to-container coercion.
impl<T> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Maybe::Present(value)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
