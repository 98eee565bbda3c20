use std::fmt;

/// Equality policy attached to an absence diagnostic.
///
/// Two predefined sentinels exist, with opposite equality behavior:
///
/// - [`Sentinel::Propagate`] preserves identity: two absent containers
///   carrying it compare equal, and its canonical diagnostic sits at the
///   minimum absence severity so it is dominated by any other diagnostic
///   during a merge (the lifting identity).
/// - [`Sentinel::Poison`] never compares equal to anything, including another
///   absence carrying the same sentinel. Its canonical diagnostic sits at the
///   maximum severity so it dominates every merge. This is the same shape as
///   IEEE NaN, and the reason the container implements `PartialEq` but not
///   `Eq`.
///
/// The sentinel is a typed field of [`Diagnostic`](crate::Diagnostic), never
/// part of the message text, so it does not interact with the severity-digit
/// rule of the textual encoding.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sentinel {
    /// Identity-preserving absence.
    #[default]
    Propagate,
    /// Never-equal absence.
    Poison,
}

impl Sentinel {
    /// Whether two absences carrying this sentinel compare equal.
    pub fn preserves_identity(self) -> bool {
        matches!(self, Sentinel::Propagate)
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentinel::Propagate => write!(f, "propagate"),
            Sentinel::Poison => write!(f, "poison"),
        }
    }
}
