//! Normalization error type.

/// Why a URL could not be canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    /// Input is not a parseable absolute URL.
    #[error("malformed URL {input:?}: {source}")]
    MalformedInput {
        input: String,
        #[source]
        source: url::ParseError,
    },
    /// Input parses but has no hierarchical path (e.g. `mailto:`).
    #[error("malformed URL {input:?}: no hierarchical path to canonicalize")]
    OpaquePath { input: String },
}

impl NormalizeError {
    /// True when the input URL itself is at fault.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            NormalizeError::MalformedInput { .. } | NormalizeError::OpaquePath { .. }
        )
    }
}
