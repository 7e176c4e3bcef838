use crate::input::ScriptError;
use crate::storage::StorageError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Script(#[from] ScriptError),
    #[error("canvas {width}x{height} exceeds {max} pixels")]
    CanvasTooLarge { width: u32, height: u32, max: u64 },
    #[error("usage: {0}")]
    Usage(String),
}
