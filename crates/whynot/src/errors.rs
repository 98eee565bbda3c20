//! Fault types for strict extraction and indexed access.
//!
//! Absence itself is never an error; these types only surface when a caller
//! explicitly asks for a value that is not there. Both carry the absorbed
//! diagnostic as context. Factory functions are the constructor surface.

use std::fmt;

use whynot_diag::Diagnostic;

/// Strict extraction was requested on an absent container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbsentError {
    diagnostic: Diagnostic,
}

impl AbsentError {
    /// The diagnostic the absent container carried.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Consume the fault, recovering the diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }
}

impl fmt::Display for AbsentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no value present: {}", self.diagnostic)
    }
}

impl std::error::Error for AbsentError {}

/// Indexed access outside the 0-or-1 sequence view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexError {
    index: usize,
    len: usize,
    diagnostic: Option<Diagnostic>,
}

impl IndexError {
    /// The rejected index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The sequence length at the time of access (0 or 1).
    pub fn sequence_len(&self) -> usize {
        self.len
    }

    /// The container's diagnostic, when the access hit an absent container.
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        self.diagnostic.as_ref()
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for sequence of length {}",
            self.index, self.len
        )?;
        if let Some(diagnostic) = &self.diagnostic {
            write!(f, " (absent: {diagnostic})")?;
        }
        Ok(())
    }
}

impl std::error::Error for IndexError {}

/// Create an "extraction on absent" fault.
pub fn absent_error(diagnostic: Diagnostic) -> AbsentError {
    AbsentError { diagnostic }
}

/// Create an "index out of bounds" fault.
pub fn index_out_of_bounds(index: usize, len: usize, diagnostic: Option<Diagnostic>) -> IndexError {
    IndexError {
        index,
        len,
        diagnostic,
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
