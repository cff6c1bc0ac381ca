//! Custom error types for the cleaning step

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        retry_count: u32,
    },

    #[error("Artifact store rejected request ({status}): {message}")]
    ArtifactStore {
        status: u16,
        message: String,
    },

    #[error("Required column missing from input table: {column}")]
    MissingColumn {
        column: String,
    },

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },
}

pub type CleanerResult<T> = Result<T, CleanerError>;
