//! Amazon S3 configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{StorageError, StorageResult};

/// Amazon S3 configuration.
///
/// Immutable once constructed; the builder methods consume `self`. Secret
/// fields never appear in `Debug` output and are skipped when the
/// configuration is serialized.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct S3Config {
    /// Bucket name.
    pub bucket: String,
    /// AWS region.
    pub region: String,
    /// Directory prefix applied to every object key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Custom endpoint URL (for S3-compatible storage like MinIO, R2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Access key ID.
    #[serde(skip_serializing, default)]
    pub access_key_id: Option<String>,
    /// Secret access key.
    #[serde(skip_serializing, default)]
    pub secret_access_key: Option<String>,
}

impl S3Config {
    /// Creates a new S3 configuration.
    pub fn new(bucket: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            region: region.into(),
            prefix: None,
            endpoint: None,
            access_key_id: None,
            secret_access_key: None,
        }
    }

    /// Sets the directory prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the custom endpoint (for S3-compatible storage).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the access credentials.
    pub fn with_credentials(
        mut self,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
    ) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Validates that every field required for an upload is present and
    /// non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Configuration`] naming the first offending
    /// field. Uploads must never proceed with empty credentials.
    pub fn validate(&self) -> StorageResult<()> {
        if self.bucket.is_empty() {
            return Err(StorageError::configuration("bucket name cannot be empty"));
        }

        if self.region.is_empty() {
            return Err(StorageError::configuration("region cannot be empty"));
        }

        if matches!(self.prefix.as_deref(), Some("")) {
            return Err(StorageError::configuration(
                "prefix cannot be empty when set",
            ));
        }

        if let Some(endpoint) = self.endpoint.as_deref()
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            return Err(StorageError::configuration(
                "endpoint must start with 'http://' or 'https://'",
            ));
        }

        match self.access_key_id.as_deref() {
            None | Some("") => {
                return Err(StorageError::configuration("access key id cannot be empty"));
            }
            Some(_) => {}
        }

        match self.secret_access_key.as_deref() {
            None | Some("") => {
                return Err(StorageError::configuration(
                    "secret access key cannot be empty",
                ));
            }
            Some(_) => {}
        }

        Ok(())
    }

    /// Derives the object key for a file name, applying the directory
    /// prefix.
    ///
    /// Leading slashes and surrounding whitespace are stripped so caller
    /// supplied names cannot escape the prefix.
    pub fn object_key(&self, name: &str) -> StorageResult<String> {
        let name = name.trim().trim_start_matches('/');

        if name.is_empty() {
            return Err(StorageError::invalid_key("object name cannot be empty"));
        }

        match self.prefix.as_deref() {
            Some(prefix) => Ok(format!("{}/{name}", prefix.trim_matches('/'))),
            None => Ok(name.to_string()),
        }
    }

    /// Returns the public URL for an object key.
    ///
    /// Virtual hosted-style addressing for AWS, path-style under a custom
    /// endpoint.
    pub fn object_url(&self, key: &str) -> StorageResult<Url> {
        let raw = match self.endpoint.as_deref() {
            Some(endpoint) => {
                format!("{}/{}/{key}", endpoint.trim_end_matches('/'), self.bucket)
            }
            None => format!(
                "https://{}.s3.{}.amazonaws.com/{key}",
                self.bucket, self.region
            ),
        };

        Url::parse(&raw)
            .map_err(|err| StorageError::invalid_key(format!("cannot form object URL: {err}")))
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("prefix", &self.prefix)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
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
    fn test_validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_validate_names_offending_field() {
        let cases = [
            (S3Config::new("", "ap-northeast-2"), "bucket"),
            (S3Config::new("bookmesh", ""), "region"),
            (valid_config().with_prefix(""), "prefix"),
            (S3Config::new("bookmesh", "ap-northeast-2"), "access key id"),
            (
                S3Config::new("bookmesh", "ap-northeast-2").with_credentials("AKIAEXAMPLE", ""),
                "secret access key",
            ),
            (valid_config().with_endpoint("minio:9000"), "endpoint"),
        ];

        for (config, field) in cases {
            let err = config.validate().unwrap_err();
            assert!(err.is_configuration());
            assert!(
                err.to_string().contains(field),
                "{err} should mention {field}"
            );
        }
    }

    #[test]
    fn test_object_key_applies_prefix() {
        let config = valid_config();

        assert_eq!(config.object_key("cover.png").unwrap(), "images/cover.png");
        assert_eq!(config.object_key("/cover.png").unwrap(), "images/cover.png");
        assert_eq!(
            config.object_key("books/12/cover.png").unwrap(),
            "images/books/12/cover.png"
        );
    }

    #[test]
    fn test_object_key_without_prefix() {
        let config = S3Config::new("bookmesh", "ap-northeast-2");
        assert_eq!(config.object_key("cover.png").unwrap(), "cover.png");
    }

    #[test]
    fn test_object_key_rejects_empty_name() {
        let err = valid_config().object_key("  ").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
    }

    #[test]
    fn test_object_url_virtual_hosted_style() {
        let url = valid_config().object_url("images/cover.png").unwrap();
        assert_eq!(
            url.as_str(),
            "https://bookmesh.s3.ap-northeast-2.amazonaws.com/images/cover.png"
        );
    }

    #[test]
    fn test_object_url_custom_endpoint() {
        let config = valid_config().with_endpoint("http://localhost:9000/");
        let url = config.object_url("images/cover.png").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:9000/bookmesh/images/cover.png"
        );
    }

    #[test]
    fn test_secrets_redacted() {
        let config = valid_config();

        let debug = format!("{config:?}");
        assert!(!debug.contains("AKIAEXAMPLE"));
        assert!(!debug.contains("secret"));

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("access_key_id").is_none());
        assert!(json.get("secret_access_key").is_none());
    }
}
