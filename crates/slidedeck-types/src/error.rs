//! Error types for slidedeck.

use std::io;

/// Errors produced by the slidedeck crates.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("selector error: {0}")]
    Selector(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform error: {0}")]
    Platform(String),

    #[error("document error: {0}")]
    Dom(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DeckError>;
