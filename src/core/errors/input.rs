use thiserror::Error;

/// A raw button code or a button name with no entry in the symbolic vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnrecognizedButton {
    #[error("unrecognized button code: {0}")]
    Code(String),

    #[error("unrecognized button name: {0:?}")]
    Name(String),
}
