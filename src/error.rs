use std::path::PathBuf;

use thiserror::Error;

/// Problems loading the word list. All of these are fatal at startup.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,

    #[error("bundled deck not found: {0}")]
    MissingAsset(String),

    #[error("deck {name} is not valid utf-8")]
    Encoding { name: String },

    #[error("failed to parse deck {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write config to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to open log file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter {directive:?}: {reason}")]
    Filter { directive: String, reason: String },

    #[error("a global logger is already installed")]
    AlreadyInstalled,
}
