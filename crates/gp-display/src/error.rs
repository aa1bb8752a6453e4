use gp_core::CoreError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DisplayError {
    /// A marker update was rejected; the engine state is unchanged.
    #[error("marker rejected: {0}")]
    OutOfRange(#[from] CoreError),

    #[error("invalid view configuration: {0}")]
    Config(String),
}

pub type DisplayResult<T> = Result<T, DisplayError>;
