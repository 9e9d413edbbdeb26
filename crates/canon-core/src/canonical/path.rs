//! Path-level helpers.

/// Trims every trailing `/`, keeping a lone root `/`.
///
/// Trimming all of them (not just one) keeps normalization idempotent for
/// paths like `/a//`.
pub(crate) fn trim_trailing_slashes(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}
