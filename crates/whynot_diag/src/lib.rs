//! Severity-ranked diagnostics describing why a value is absent.
//!
//! Defines the encoding shared by every absent container:
//! - [`Severity`]: a single decimal rank `0..=9`. Rank 0 is reserved for
//!   "value present"; ranks 1–9 are increasing absence severities.
//! - [`Sentinel`]: one of two predefined absence policies with opposite
//!   equality behavior (identity-preserving vs. never-equal).
//! - [`Diagnostic`]: severity + sentinel + free-text message, with a textual
//!   form `"<digit><message>"` accepted by [`Diagnostic::parse`] and emitted
//!   by its `Display` impl.
//!
//! The severity total order (rank first, message as tie-break) exists only to
//! pick a dominant diagnostic when two absences merge; it never participates
//! in equality. See [`Diagnostic::merge`].

mod diagnostic;
mod errors;
mod sentinel;
mod severity;

pub use diagnostic::Diagnostic;
pub use errors::{malformed_diagnostic, reserved_present, severity_out_of_range, DiagError};
pub use sentinel::Sentinel;
pub use severity::Severity;
