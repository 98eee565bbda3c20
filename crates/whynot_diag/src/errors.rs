//! Fault types for diagnostic construction.
//!
//! Construction faults are the only failures this crate raises; everything
//! downstream of a validated [`Diagnostic`](crate::Diagnostic) is in-band
//! absence, never an error. Factory functions are the public constructor
//! surface.

use std::fmt;

/// A diagnostic construction was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiagError {
    /// The text was empty or did not start with an ASCII digit.
    Malformed { text: String },
    /// The severity was 0, which is reserved for "value present".
    ReservedPresent { text: String },
    /// A raw rank above 9 was supplied.
    SeverityOutOfRange { rank: u8 },
}

impl fmt::Display for DiagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { text } => {
                write!(f, "malformed diagnostic {text:?}: expected a leading severity digit 0-9")
            }
            Self::ReservedPresent { text } => {
                write!(f, "diagnostic {text:?} uses severity 0, which is reserved for present values")
            }
            Self::SeverityOutOfRange { rank } => {
                write!(f, "severity rank {rank} out of range (0-9)")
            }
        }
    }
}

impl std::error::Error for DiagError {}

/// Create a "malformed diagnostic" fault.
pub fn malformed_diagnostic(text: impl Into<String>) -> DiagError {
    DiagError::Malformed { text: text.into() }
}

/// Create a "severity 0 is reserved" fault.
pub fn reserved_present(text: impl Into<String>) -> DiagError {
    DiagError::ReservedPresent { text: text.into() }
}

/// Create a "rank out of range" fault.
pub fn severity_out_of_range(rank: u8) -> DiagError {
    DiagError::SeverityOutOfRange { rank }
}
