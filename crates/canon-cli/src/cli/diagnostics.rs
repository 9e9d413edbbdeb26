//! Diagnostics sink for interactive use: log and tell the user on stderr.

use canon_core::canonical::NormalizeError;
use canon_core::diagnostics::{Diagnostics, TracingDiagnostics};

#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn malformed(&self, input: &str, err: &NormalizeError) {
        TracingDiagnostics.malformed(input, err);
        eprintln!("warning: {err}; using input unchanged");
    }

    fn duplicate_loc(&self, loc: &str) {
        TracingDiagnostics.duplicate_loc(loc);
        eprintln!("warning: duplicate sitemap entry dropped: {loc}");
    }
}
