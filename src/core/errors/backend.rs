use thiserror::Error;

/// Failures surfaced by a render backend. Fatal to the call that produced them.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("surface error: {0}")]
    Surface(String),

    #[error("texture error: {0}")]
    Texture(String),

    #[error("{0} is not supported by this backend")]
    Unsupported(&'static str),

    #[error("depth target holds {actual} values but the framebuffer has {expected}")]
    DepthBufferSize { expected: usize, actual: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
