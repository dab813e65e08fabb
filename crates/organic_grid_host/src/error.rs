//! Error type for the host-integration layer.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PluginError>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum PluginError {
    /// The grid configuration was rejected by the core.
    #[error(transparent)]
    Config(#[from] organic_grid::error::Error),

    /// A UI value could not be converted into a configuration field.
    #[error("invalid input: {0}")]
    Input(String),

    /// The host document refused an operation.
    #[error("document operation failed: {0:#}")]
    Document(anyhow::Error),

    #[error("malformed message: {0}")]
    Message(#[from] serde_json::Error),

    #[error("invalid preset file: {0}")]
    Preset(#[from] ron::error::SpannedError),

    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}
