use thiserror::Error;

use crate::core::errors::backend::BackendError;

#[derive(Debug, Error)]
pub enum WindowError {
    #[error("show_window must be enabled to use `{operation}`")]
    NoVisibleSurface { operation: &'static str },

    #[error("invalid cursor shape {0}: must be -2 (default), -1 (hidden) or 0-9")]
    InvalidCursorShape(i32),

    #[error("invalid window configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create native window: {0}")]
    Os(#[from] winit::error::OsError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
