use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("site not found: {0}")]
    SiteNotFound(String),

    #[error("already at template version {0}")]
    VersionUnchanged(String),

    #[error("store error: {0}")]
    Store(#[from] stencil_store::StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
