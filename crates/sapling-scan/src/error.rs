//! Error types for scanning

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Note decryption or decoding error
    #[error(transparent)]
    Core(#[from] sapling_core::Error),

    /// Thread pool could not be built
    #[error("Thread pool error: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(format!("{}", e))
    }
}
