//! Upload client over the OpenDAL S3 operator.

use derive_more::Display;
use opendal::{Operator, services};
use url::Url;

use crate::TRACING_TARGET;
use crate::config::S3Config;
use crate::error::{StorageError, StorageResult};

/// Durable reference to an uploaded object.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("{url}")]
pub struct ObjectLocation {
    /// Object key inside the bucket, prefix included.
    pub key: String,
    /// Public URL the object is retrievable from.
    pub url: Url,
}

/// Client for uploading files into the configured bucket.
///
/// Construction validates the configuration and fails fast; a constructed
/// client holds everything it needs for the lifetime of the process.
#[derive(Clone)]
pub struct StorageClient {
    operator: Operator,
    config: S3Config,
}

impl StorageClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Configuration`] if a required field is empty
    /// and [`StorageError::Init`] if the operator cannot be built.
    pub fn new(config: S3Config) -> StorageResult<Self> {
        config.validate()?;
        let operator = Self::create_operator(&config)?;

        tracing::info!(
            target: TRACING_TARGET,
            bucket = %config.bucket,
            region = %config.region,
            prefix = ?config.prefix,
            "storage client initialized"
        );

        Ok(Self { operator, config })
    }

    /// Returns the configuration backing this client.
    pub fn config(&self) -> &S3Config {
        &self.config
    }

    /// Uploads one object and returns its durable location.
    ///
    /// Exactly one provider write per call. Retry, timeout, and
    /// cancellation policy belong to the caller; durability of the stored
    /// object is the provider's contract.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidKey`] if `name` cannot be turned into
    /// an object key and [`StorageError::Upload`] wrapping the provider
    /// error on network or auth failure.
    pub async fn upload(&self, name: &str, data: &[u8]) -> StorageResult<ObjectLocation> {
        let key = self.config.object_key(name)?;

        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            size = data.len(),
            "uploading object"
        );

        self.operator
            .write(&key, data.to_vec())
            .await
            .map_err(|source| StorageError::upload(key.clone(), source))?;

        let url = self.config.object_url(&key)?;

        tracing::debug!(
            target: TRACING_TARGET,
            key = %key,
            url = %url,
            "upload complete"
        );

        Ok(ObjectLocation { key, url })
    }

    /// Creates an OpenDAL operator from the configuration.
    fn create_operator(config: &S3Config) -> StorageResult<Operator> {
        let mut builder = services::S3::default()
            .bucket(&config.bucket)
            .region(&config.region);

        if let Some(ref endpoint) = config.endpoint {
            builder = builder.endpoint(endpoint);
        }

        if let Some(ref access_key_id) = config.access_key_id {
            builder = builder.access_key_id(access_key_id);
        }

        if let Some(ref secret_access_key) = config.secret_access_key {
            builder = builder.secret_access_key(secret_access_key);
        }

        Operator::new(builder)
            .map(|op| op.finish())
            .map_err(|e| StorageError::init(e.to_string()))
    }
}

impl std::fmt::Debug for StorageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageClient")
            .field("bucket", &self.config.bucket)
            .field("region", &self.config.region)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> S3Config {
        S3Config::new("bookmesh", "ap-northeast-2")
            .with_prefix("images")
            .with_credentials("AKIAEXAMPLE", "secret")
    }

    #[test]
    fn test_new_rejects_incomplete_config() {
        let err = StorageClient::new(S3Config::new("bookmesh", "ap-northeast-2")).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_new_builds_operator_for_valid_config() {
        let client = StorageClient::new(valid_config()).unwrap();
        assert_eq!(client.config().bucket, "bookmesh");
    }

    #[tokio::test]
    async fn test_upload_rejects_empty_name() {
        let client = StorageClient::new(valid_config()).unwrap();

        let err = client.upload("", b"data").await.unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[test]
    fn test_debug_omits_credentials() {
        let client = StorageClient::new(valid_config()).unwrap();
        let debug = format!("{client:?}");

        assert!(debug.contains("bookmesh"));
        assert!(!debug.contains("AKIAEXAMPLE"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_location_displays_url() {
        let config = valid_config();
        let key = config.object_key("cover.png").unwrap();
        let location = ObjectLocation {
            url: config.object_url(&key).unwrap(),
            key,
        };

        assert_eq!(
            location.to_string(),
            "https://bookmesh.s3.ap-northeast-2.amazonaws.com/images/cover.png"
        );
    }
}
