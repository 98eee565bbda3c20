//! Process-wide defaults.
//!
//! The default sentinel selector is process-lifetime configuration: it is set
//! at most once, during initialization, before any concurrent use. A
//! `OnceLock` makes a second initialization fail instead of racing readers.

use std::sync::OnceLock;

use whynot_diag::Sentinel;

static DEFAULT_SENTINEL: OnceLock<Sentinel> = OnceLock::new();

/// Select the sentinel produced by [`Maybe::empty`](crate::Maybe::empty).
///
/// First writer wins: returns `false` when the default was already set, and
/// the earlier selection stays in effect. When never set, the default is
/// [`Sentinel::Propagate`].
pub fn set_default_sentinel(sentinel: Sentinel) -> bool {
    DEFAULT_SENTINEL.set(sentinel).is_ok()
}

/// The currently selected default sentinel.
pub fn default_sentinel() -> Sentinel {
    DEFAULT_SENTINEL.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests;
