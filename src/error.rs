//! Error taxonomy for the scoring core and the spotlight navigator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpotlightError {
    /// The navigator holds no entries; callers render a placeholder instead.
    #[error("spotlight has no entries (empty catalog)")]
    EmptyCatalog,
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
    #[error("duplicate identifier in catalog: {0}")]
    DuplicateIdentifier(String),
}
