use std::fmt;

use crate::errors::{severity_out_of_range, DiagError};

/// Severity rank of a diagnostic, one decimal digit `0..=9`.
///
/// Rank 0 is reserved for "value present" and may never be carried by an
/// absence diagnostic. Ranks 1–9 are increasing absence severities. The
/// numeric order on the rank is the order used to pick a dominant diagnostic
/// when two absences merge.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Severity(u8);

impl Severity {
    /// Reserved rank for "value present".
    pub const PRESENT: Severity = Severity(0);

    /// Lowest absence rank.
    pub const MIN_ABSENT: Severity = Severity(1);

    /// Default warning threshold for merge decisions during lifting.
    pub const DEFAULT_THRESHOLD: Severity = Severity(3);

    /// Rank synthesized for values rejected by a predicate gate.
    pub const FILTERED: Severity = Severity(4);

    /// Highest absence rank.
    pub const MAX: Severity = Severity(9);

    /// Create a severity from a raw rank. Ranks above 9 are rejected.
    pub fn new(rank: u8) -> Result<Self, DiagError> {
        if rank > 9 {
            Err(severity_out_of_range(rank))
        } else {
            Ok(Severity(rank))
        }
    }

    /// Create a severity from the leading character of a textual diagnostic.
    ///
    /// Returns `None` for anything but an ASCII digit.
    pub fn from_digit(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .map(Severity)
    }

    /// The raw rank.
    pub fn rank(self) -> u8 {
        self.0
    }

    /// True for the reserved "present" rank.
    pub fn is_present(self) -> bool {
        self.0 == 0
    }

    /// The rank as its ASCII digit.
    pub fn as_digit(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
