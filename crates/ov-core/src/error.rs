//! Error types shared by the numeric core and the selection engine

use thiserror::Error;

/// Sample arrays handed to the quadrature engine disagree in length.
///
/// This is always a defect in an example definition, never something a
/// user can trigger from the selector.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("shape mismatch in {what}: expected {expected} samples, found {found}")]
pub struct ShapeError {
    pub what: String,
    pub expected: usize,
    pub found: usize,
}

impl ShapeError {
    pub fn new(what: impl Into<String>, expected: usize, found: usize) -> Self {
        Self {
            what: what.into(),
            expected,
            found,
        }
    }

    /// Check two lengths, producing an error naming `what` when they differ
    pub fn check(what: &str, expected: usize, found: usize) -> Result<(), ShapeError> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::new(what, expected, found))
        }
    }
}

/// Errors returned by the selection state machine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("example index {index} out of range (catalog has {len} entries)")]
    OutOfRange { index: isize, len: usize },

    #[error("recomputation aborted: {0}")]
    Shape(#[from] ShapeError),
}
