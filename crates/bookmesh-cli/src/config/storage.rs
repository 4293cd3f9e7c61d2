//! Object-storage configuration arguments.

use bookmesh_opendal::S3Config;
use clap::Args;

/// Object-storage configuration.
///
/// # Environment Variables
///
/// All options can be set via environment variables:
/// - `BOOKMESH_S3_BUCKET` - Bucket the client uploads into
/// - `BOOKMESH_S3_REGION` - AWS region of the bucket
/// - `BOOKMESH_S3_PREFIX` - Directory prefix applied to every object key
/// - `BOOKMESH_S3_ENDPOINT` - Custom endpoint for S3-compatible storage
/// - `AWS_ACCESS_KEY_ID` - Access key ID
/// - `AWS_SECRET_ACCESS_KEY` - Secret access key
///
/// Credentials are intentionally environment-first; never commit them to
/// source or shell history.
#[derive(Debug, Clone, Args)]
#[must_use = "config does nothing unless you use it"]
pub struct StorageArgs {
    /// Bucket the client uploads into.
    #[arg(long, env = "BOOKMESH_S3_BUCKET")]
    pub bucket: String,

    /// AWS region of the bucket.
    #[arg(long, env = "BOOKMESH_S3_REGION")]
    pub region: String,

    /// Directory prefix applied to every object key.
    #[arg(long, env = "BOOKMESH_S3_PREFIX")]
    pub prefix: Option<String>,

    /// Custom endpoint for S3-compatible storage (MinIO, R2).
    #[arg(long, env = "BOOKMESH_S3_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Access key ID.
    #[arg(long, env = "AWS_ACCESS_KEY_ID", hide_env_values = true)]
    pub access_key_id: Option<String>,

    /// Secret access key.
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY", hide_env_values = true)]
    pub secret_access_key: Option<String>,
}

impl StorageArgs {
    /// Builds the storage configuration these arguments describe.
    pub fn to_config(&self) -> S3Config {
        let mut config = S3Config::new(&self.bucket, &self.region);

        if let Some(ref prefix) = self.prefix {
            config = config.with_prefix(prefix);
        }

        if let Some(ref endpoint) = self.endpoint {
            config = config.with_endpoint(endpoint);
        }

        if let (Some(access_key_id), Some(secret_access_key)) =
            (&self.access_key_id, &self.secret_access_key)
        {
            config = config.with_credentials(access_key_id, secret_access_key);
        }

        config
    }
}
