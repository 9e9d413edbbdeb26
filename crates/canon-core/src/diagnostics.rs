//! Diagnostics capability passed to code that must not fail on bad input.
//!
//! Fallback paths report what they swallowed through this trait instead of
//! logging on their own, so callers decide where the reports go and tests
//! can observe them.

use crate::canonical::NormalizeError;

pub trait Diagnostics {
    /// A URL could not be normalized and was passed through unchanged.
    fn malformed(&self, input: &str, err: &NormalizeError);

    /// A sitemap entry was dropped because its canonical `loc` was already emitted.
    fn duplicate_loc(&self, loc: &str);
}

/// Forwards every report to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn malformed(&self, input: &str, err: &NormalizeError) {
        tracing::warn!(input, "canonical URL fallback to original: {}", err);
    }

    fn duplicate_loc(&self, loc: &str) {
        tracing::warn!(loc, "duplicate sitemap entry dropped");
    }
}
