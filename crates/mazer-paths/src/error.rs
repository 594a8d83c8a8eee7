//! Errors reported when starting a search.

use std::fmt;

/// Errors that can occur when a search is invoked on a maze.
///
/// An unreachable or undesignated end is deliberately *not* here: both
/// are expected outcomes, reported as an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The maze has no designated start cell, so the search has no root.
    NoStart,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStart => write!(f, "no start cell designated"),
        }
    }
}

impl std::error::Error for SearchError {}
