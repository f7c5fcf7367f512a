use thiserror::Error;

use crate::change::ChangeCategory;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid change path: {0:?}")]
    InvalidPath(String),

    #[error("change category {category} does not match path {path:?}")]
    CategoryMismatch {
        category: ChangeCategory,
        path: String,
    },

    #[error("report count mismatch for {field}: declared {declared}, derived {derived}")]
    CountMismatch {
        field: &'static str,
        declared: usize,
        derived: usize,
    },
}

/// Convenience alias for type-level results.
pub type TypeResult<T> = Result<T, TypeError>;
