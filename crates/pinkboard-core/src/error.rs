//! Error types for Pinkboard

use thiserror::Error;

/// The main error type for Pinkboard operations
#[derive(Debug, Error)]
pub enum PinkboardError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("Font error: {0}")]
    FontError(String),

    #[error("Audio error: {0}")]
    AudioError(String),

    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

/// Result type alias for Pinkboard operations
pub type Result<T> = std::result::Result<T, PinkboardError>;

impl From<toml::de::Error> for PinkboardError {
    fn from(err: toml::de::Error) -> Self {
        PinkboardError::TomlParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_errors_convert() {
        let err: PinkboardError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, PinkboardError::TomlParseError(_)));
        assert!(err.to_string().starts_with("TOML parse error"));
    }
}
