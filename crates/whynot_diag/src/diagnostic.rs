//! The absence diagnostic: severity, sentinel, and message.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{malformed_diagnostic, reserved_present, DiagError};
use crate::{Sentinel, Severity};

/// A compact explanation for a missing value.
///
/// A diagnostic carries a [`Severity`] rank, a [`Sentinel`] equality policy,
/// and a free-text message. It is immutable once constructed and validated at
/// creation: an absence diagnostic never carries [`Severity::PRESENT`].
///
/// The textual form is `"<digit><message>"`: [`Diagnostic::parse`] accepts it
/// and the `Display` impl reproduces it. The sentinel is a typed field and
/// never appears in the text.
///
/// Structural equality on `Diagnostic` compares all three fields; whether two
/// *absent containers* compare equal is a separate question answered by the
/// sentinel policy, not by this impl.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "a diagnostic explains an absence and should be attached or propagated"]
pub struct Diagnostic {
    severity: Severity,
    sentinel: Sentinel,
    message: String,
}

impl Diagnostic {
    /// Create a diagnostic from a validated severity and a message.
    ///
    /// Rejects [`Severity::PRESENT`]: rank 0 marks a present value and may
    /// not explain an absence.
    pub fn new(severity: Severity, message: impl Into<String>) -> Result<Self, DiagError> {
        let message = message.into();
        if severity.is_present() {
            return Err(reserved_present(message));
        }
        Ok(Diagnostic {
            severity,
            sentinel: Sentinel::Propagate,
            message,
        })
    }

    /// Parse the textual form `"<digit><message>"`.
    ///
    /// Rejects empty text, text whose first character is not an ASCII digit,
    /// and a leading `'0'` (reserved for present). Parsed diagnostics carry
    /// [`Sentinel::Propagate`].
    pub fn parse(text: &str) -> Result<Self, DiagError> {
        let mut chars = text.chars();
        let Some(first) = chars.next() else {
            return Err(malformed_diagnostic(text));
        };
        let Some(severity) = Severity::from_digit(first) else {
            return Err(malformed_diagnostic(text));
        };
        if severity.is_present() {
            return Err(reserved_present(text));
        }
        Ok(Diagnostic {
            severity,
            sentinel: Sentinel::Propagate,
            message: chars.as_str().to_owned(),
        })
    }

    /// The canonical identity-preserving absence.
    ///
    /// Minimum severity, so it is dominated by any other diagnostic during a
    /// merge.
    pub fn propagate() -> Self {
        Diagnostic {
            severity: Severity::MIN_ABSENT,
            sentinel: Sentinel::Propagate,
            message: "no value".to_owned(),
        }
    }

    /// The canonical never-equal absence.
    ///
    /// Maximum severity, so it dominates every merge.
    pub fn poison() -> Self {
        Diagnostic {
            severity: Severity::MAX,
            sentinel: Sentinel::Poison,
            message: "poisoned".to_owned(),
        }
    }

    /// A diagnostic for a value rejected by a predicate gate.
    ///
    /// Carries [`Severity::FILTERED`]; `detail` should embed the rejected
    /// value for debuggability.
    pub fn filtered(detail: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::FILTERED,
            sentinel: Sentinel::Propagate,
            message: detail.into(),
        }
    }

    /// Replace the sentinel policy.
    pub fn with_sentinel(mut self, sentinel: Sentinel) -> Self {
        self.sentinel = sentinel;
        self
    }

    /// The severity rank.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// The equality policy.
    pub fn sentinel(&self) -> Sentinel {
        self.sentinel
    }

    /// The free-text message (without the severity digit).
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Total order used to pick a dominant diagnostic when merging.
    ///
    /// Severity first; ties broken lexicographically on the message. Never
    /// used for equality.
    pub fn cmp_dominance(&self, other: &Self) -> Ordering {
        self.severity
            .cmp(&other.severity)
            .then_with(|| self.message.cmp(&other.message))
    }

    /// Merge two absence diagnostics per the dominance rule.
    ///
    /// The dominant diagnostic (greater under [`cmp_dominance`], `left`
    /// preferred on exact ties) decides severity and sentinel. Above
    /// `threshold` it propagates verbatim; at or below, the result's message
    /// records both operands, dominant first. A merge never yields a present
    /// value.
    ///
    /// [`cmp_dominance`]: Diagnostic::cmp_dominance
    pub fn merge(left: Self, right: Self, threshold: Severity) -> Self {
        let (dominant, other) = if left.cmp_dominance(&right) == Ordering::Less {
            (right, left)
        } else {
            (left, right)
        };
        if dominant.severity > threshold {
            return dominant;
        }
        let message = match (dominant.message.is_empty(), other.message.is_empty()) {
            (false, false) => format!("{}; {}", dominant.message, other.message),
            (true, _) => other.message,
            (_, true) => dominant.message,
        };
        Diagnostic {
            severity: dominant.severity,
            sentinel: dominant.sentinel,
            message,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.severity.as_digit(), self.message)
    }
}
