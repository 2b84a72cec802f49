use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("unknown scene message: {0}")]
    UnknownMessage(String),
    #[error("game window is not available")]
    WindowUnavailable,
    #[error("failed to emit scene event: {0}")]
    Emit(#[from] tauri::Error),
}
