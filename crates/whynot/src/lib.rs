//! An optional scalar value that remembers why it is absent.
//!
//! [`Maybe<T>`] is either `Present(T)` or `Absent(Diagnostic)`: computations
//! propagate "no value, and why" in-band instead of raising, while still
//! supporting equality, hashing, 0-or-1 sequence traversal, and lifting of
//! scalar operators over any combination of present and absent operands.
//!
//! ```
//! use whynot::{lift2, Diagnostic, Maybe};
//!
//! let price = Maybe::present(40);
//! let tax = Maybe::present(2);
//! assert_eq!(lift2(|a, b| a + b, price, tax), Maybe::present(42));
//!
//! let missing: Maybe<i32> = Maybe::absent(Diagnostic::parse("7sensor offline")?);
//! let total = lift2(|a, b| a + b, Maybe::present(40), missing);
//! assert!(total.is_absent());
//! assert_eq!(total.diagnostic().map(|d| d.message()), Some("sensor offline"));
//! # Ok::<(), whynot::DiagError>(())
//! ```
//!
//! # Error handling
//!
//! Absence is never a Rust `Err`: every combinator and lift returns a valid,
//! possibly absent, container. Faults only surface on explicit request —
//! malformed diagnostic construction ([`DiagError`]), strict extraction on an
//! absent container ([`AbsentError`]), or out-of-range indexed access
//! ([`IndexError`]) — and each carries the absorbed diagnostic text.
//!
//! # Process-wide configuration
//!
//! [`set_default_sentinel`] selects the sentinel produced by
//! [`Maybe::empty`]. It is set-once process-lifetime state; call it during
//! initialization, before any concurrent use.

mod combine;
mod config;
pub mod errors;
mod iter;
mod lift;
mod maybe;

pub use config::{default_sentinel, set_default_sentinel};
pub use errors::{AbsentError, IndexError};
pub use iter::{IntoIter, Iter};
pub use lift::{lift1, lift2, lift2_with};
pub use maybe::Maybe;

// Re-export the diagnostic encoding so callers need one import.
pub use whynot_diag::{DiagError, Diagnostic, Sentinel, Severity};
