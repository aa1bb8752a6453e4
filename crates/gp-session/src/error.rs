use gp_core::CoreError;
use gp_display::DisplayError;
use thiserror::Error;

use crate::LayerHandle;

/// Failures reported by a [`MapRenderer`][crate::MapRenderer] backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("map has not been created")]
    NoMap,

    #[error("unknown layer {0}")]
    UnknownLayer(LayerHandle),

    #[error("map backend error: {0}")]
    Backend(String),
}

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("session configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Display(#[from] DisplayError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),
}

pub type SessionResult<T> = Result<T, SessionError>;
