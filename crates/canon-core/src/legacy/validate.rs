//! Table validation: rejects rules that would make normalization non-idempotent.

use std::fmt;

use super::LegacyPathRule;

/// Characters that the URL serializer would percent-encode or reinterpret
/// when the rewritten path is written back, so a rule using them could never
/// match its own output.
const FORBIDDEN_CHARS: &[char] = &['?', '#', '"', '<', '>', '`', '{', '}', '\\', '%'];

/// What is wrong with one side of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathProblem {
    Empty,
    MissingLeadingSlash,
    TrailingSlash,
    ForbiddenChar(char),
    DotSegment,
}

impl fmt::Display for PathProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathProblem::Empty => write!(f, "is empty"),
            PathProblem::MissingLeadingSlash => write!(f, "must start with '/'"),
            PathProblem::TrailingSlash => write!(f, "must not end with '/'"),
            PathProblem::ForbiddenChar(c) => write!(f, "contains forbidden character {c:?}"),
            PathProblem::DotSegment => write!(f, "contains a '.' or '..' segment"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TableError {
    #[error("legacy rule {index}: {side} path {path:?} {problem}")]
    InvalidPath {
        index: usize,
        side: &'static str,
        path: String,
        problem: PathProblem,
    },
    #[error("legacy rule {index}: source and destination are both {path:?}")]
    Identity { index: usize, path: String },
    #[error("legacy rule {index}: source {from:?} is already declared by rule {first}")]
    DuplicateSource {
        index: usize,
        first: usize,
        from: String,
    },
    #[error("legacy rule {index}: destination {to:?} contains source {from:?} of rule {other}")]
    Recursive {
        index: usize,
        other: usize,
        to: String,
        from: String,
    },
    #[error(
        "legacy rule {index}: destination {to:?} can join surrounding path text \
         to form source {from:?} of rule {other}"
    )]
    Overlapping {
        index: usize,
        other: usize,
        to: String,
        from: String,
    },
}

fn check_path(path: &str) -> Result<(), PathProblem> {
    if path.is_empty() {
        return Err(PathProblem::Empty);
    }
    if !path.starts_with('/') {
        return Err(PathProblem::MissingLeadingSlash);
    }
    if path.ends_with('/') {
        return Err(PathProblem::TrailingSlash);
    }
    if let Some(c) = path
        .chars()
        .find(|c| FORBIDDEN_CHARS.contains(c) || !c.is_ascii_graphic())
    {
        return Err(PathProblem::ForbiddenChar(c));
    }
    if path.split('/').any(|seg| seg == "." || seg == "..") {
        return Err(PathProblem::DotSegment);
    }
    Ok(())
}

/// True if inserting `to` into a path can create an occurrence of `from`
/// that spans the insertion boundary: a tail of `to` that starts `from`, a
/// head of `to` that ends `from`, or `to` strictly inside `from`.
fn can_form_across_boundary(to: &str, from: &str) -> bool {
    if to.len() < from.len() && from.contains(to) {
        return true;
    }
    for k in 1..=to.len().min(from.len().saturating_sub(1)) {
        if from.starts_with(&to[to.len() - k..]) || from.ends_with(&to[..k]) {
            return true;
        }
    }
    false
}

pub(super) fn validate_rules(rules: &[LegacyPathRule]) -> Result<(), TableError> {
    for (index, rule) in rules.iter().enumerate() {
        for (side, path) in [("source", &rule.from), ("destination", &rule.to)] {
            check_path(path).map_err(|problem| TableError::InvalidPath {
                index,
                side,
                path: path.clone(),
                problem,
            })?;
        }
        if rule.from == rule.to {
            return Err(TableError::Identity {
                index,
                path: rule.from.clone(),
            });
        }
        if let Some(first) = rules[..index].iter().position(|r| r.from == rule.from) {
            return Err(TableError::DuplicateSource {
                index,
                first,
                from: rule.from.clone(),
            });
        }
    }

    for (index, rule) in rules.iter().enumerate() {
        if let Some((other, hit)) = rules
            .iter()
            .enumerate()
            .find(|(_, r)| rule.to.contains(r.from.as_str()))
        {
            return Err(TableError::Recursive {
                index,
                other,
                to: rule.to.clone(),
                from: hit.from.clone(),
            });
        }
    }

    for (index, rule) in rules.iter().enumerate() {
        if let Some((other, hit)) = rules
            .iter()
            .enumerate()
            .find(|(_, r)| can_form_across_boundary(&rule.to, &r.from))
        {
            return Err(TableError::Overlapping {
                index,
                other,
                to: rule.to.clone(),
                from: hit.from.clone(),
            });
        }
    }

    Ok(())
}
