use std::path::PathBuf;

/// Errors that can occur while persisting records
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The destination could not be created or opened
    #[error("failed to open sink {path}: {source}")]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be encoded to its wire form
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing to or closing the sink failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The record source failed part way through a batch
    #[error("record source failed: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An earlier operation failed and the output is no longer well formed
    #[error("writer is poisoned by an earlier failure: {0}")]
    Poisoned(String),

    /// The sink has already been released
    #[error("writer is closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, WriteError>;
