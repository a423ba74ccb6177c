use std::path::PathBuf;
use thiserror::Error;

/// Why a submission failed. Every variant is terminal for that submission.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Could not read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request could not be delivered: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response from server: {0}")]
    Protocol(#[source] serde_json::Error),

    #[error("Could not encode request: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubmitError>;
