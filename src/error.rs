// src/error.rs
// Error types surfaced by the controller and the terminal front end

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CredzError {
    #[error("unknown credential id: {0}")]
    UnknownCredential(String),

    #[error("unknown wallet provider: {0} (expected one of: phantom, metamask, coinbase, here, walletconnect)")]
    UnknownProvider(String),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, CredzError>;
