//! Palette error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("duplicate action id: {0}")]
    DuplicateId(String),

    #[error("parent chain does not terminate, cycle through: {0}")]
    CycleDetected(String),

    #[error("unknown action id: {0}")]
    UnknownAction(String),

    #[error("path '{0}' is missing organization/project segments")]
    InsufficientPath(String),

    #[error("navigation failed: {0}")]
    Host(#[from] anyhow::Error),
}
