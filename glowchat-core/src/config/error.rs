use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("'ui.tick_rate_ms' must be greater than zero")]
    InvalidTickRate,

    #[error("animation axis '{axis}' has a zero-length cycle")]
    ZeroCycle { axis: &'static str },

    #[error("'chat.reply_text' must not be blank")]
    EmptyReplyText,
}
