/// Errors from template and site store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Update of a template that was never inserted.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Update of a site that was never inserted.
    #[error("site not found: {0}")]
    SiteNotFound(String),

    /// Insert of a record whose key is already taken.
    #[error("{kind} already exists: {id}")]
    Duplicate { kind: &'static str, id: String },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
