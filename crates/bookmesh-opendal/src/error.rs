//! Storage error types.

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while talking to object storage.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A required configuration field is missing or empty.
    #[error("invalid storage configuration: {0}")]
    Configuration(String),

    /// Failed to initialize the storage operator.
    #[error("storage initialization failed: {0}")]
    Init(String),

    /// Object name cannot be turned into a valid key or URL.
    #[error("invalid object name: {0}")]
    InvalidKey(String),

    /// Upload failed on the provider side.
    #[error("upload failed for {key}")]
    Upload {
        /// Object key the upload targeted.
        key: String,
        /// Underlying provider error.
        #[source]
        source: opendal::Error,
    },
}

impl StorageError {
    /// Creates a new configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Creates a new initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }

    /// Creates a new invalid key error.
    pub fn invalid_key(msg: impl Into<String>) -> Self {
        Self::InvalidKey(msg.into())
    }

    /// Creates a new upload error wrapping the provider error.
    pub fn upload(key: impl Into<String>, source: opendal::Error) -> Self {
        Self::Upload {
            key: key.into(),
            source,
        }
    }

    /// Returns true if this error was raised before any provider call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Returns true if the provider rejected or failed the upload.
    pub fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }
}
