use std::path::PathBuf;

use crate::id::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("bind of {element:?} on {window} rejected: {reason}")]
    Rejected {
        window: WindowId,
        element: String,
        reason: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The engine reported failure: the script threw, timed out, or the
    /// window is gone. Whatever text the engine wrote first is carried.
    #[error("script execution failed: {partial:?}")]
    Failed { partial: String },
}

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("payload is not an integer: {0:?}")]
    NotAnInteger(String),

    #[error("payload is not a boolean: {0:?}")]
    NotABoolean(String),

    #[error("embedded text decode failed: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config io error: {0}")]
    Io(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OrielError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Script(#[from] ScriptError),

    #[error(transparent)]
    Payload(#[from] PayloadError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Window(String),
}
