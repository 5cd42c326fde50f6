use thiserror::Error;

/// Errors raised by the scene core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// The named canvas container does not exist in the host
    #[error("canvas container `{0}` not found")]
    MountFailure(String),

    /// An image (or video) source could not be fetched or decoded
    #[error("failed to load `{url}`: {reason}")]
    ResourceLoad { url: String, reason: String },

    /// A font family outside the supported set reached the presentation boundary
    #[error("unsupported font family `{0}`")]
    UnknownFontFamily(String),
}

impl EditorError {
    pub fn resource_load(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::ResourceLoad {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
