use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FieldError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("frame source has no frames")]
    EmptySource,
    #[error("invalid asset encoding: {0}")]
    InvalidAssetEncoding(String),
}

pub type Result<T> = std::result::Result<T, FieldError>;

impl FieldError {
    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        FieldError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn asset(reason: impl Into<String>) -> Self {
        FieldError::InvalidAssetEncoding(reason.into())
    }
}
