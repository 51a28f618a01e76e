use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Creating the data directory or writing a seed file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A seed value could not be serialized, or a file read back is not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
