//! Record store errors.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordStoreError {
    #[error("record already exists")]
    AlreadyExists,

    #[error("related record not found")]
    InvalidReference,

    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("record storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed record: {0}")]
    Json(#[from] serde_json::Error),
}
