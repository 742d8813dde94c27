use thiserror::Error;

/// Failure reading or writing the persisted selection.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read selection: {0}")]
    Read(String),
    #[error("failed to write selection: {0}")]
    Write(String),
}

/// Failure loading the venue document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load venue data: {0}")]
    Request(String),
    #[error("Failed to load venue data (HTTP {0})")]
    Status(u16),
    #[error("Venue data is malformed: {0}")]
    Decode(String),
}
