//! CLI configuration management.
//!
//! All configuration can be provided via CLI arguments or environment
//! variables. Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! # Configure the bucket explicitly
//! bookmesh-cli --bucket bookmesh --region ap-northeast-2 upload ./cover.png
//!
//! # Or via environment variables
//! BOOKMESH_S3_BUCKET=bookmesh BOOKMESH_S3_REGION=ap-northeast-2 \
//!     bookmesh-cli upload ./cover.png
//! ```

mod storage;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
pub use storage::StorageArgs;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "bookmesh")]
#[command(about = "Bookmesh object-storage uploader")]
#[command(version)]
pub struct Cli {
    /// Object-storage configuration (bucket, region, credentials).
    #[clap(flatten)]
    pub storage: StorageArgs,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Uploads one file into the configured bucket.
    Upload {
        /// Path of the file to upload.
        file: PathBuf,

        /// Object name to store the file under; defaults to the file name.
        #[arg(long)]
        name: Option<String>,
    },
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses
    /// CLI arguments.
    ///
    /// This is the preferred way to initialize the CLI configuration as it
    /// ensures .env files are loaded before clap parses arguments, allowing
    /// environment variables from .env to be used as defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    /// Loads environment variables from .env file if the dotenv feature is
    /// enabled.
    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    /// No-op when dotenv feature is disabled.
    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Initializes tracing with environment-based filtering.
    pub fn init_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_command_parses() {
        let cli = Cli::try_parse_from([
            "bookmesh",
            "--bucket",
            "bookmesh",
            "--region",
            "ap-northeast-2",
            "--access-key-id",
            "AKIAEXAMPLE",
            "--secret-access-key",
            "secret",
            "upload",
            "./cover.png",
            "--name",
            "books/12/cover.png",
        ])
        .unwrap();

        let Command::Upload { file, name } = cli.command;
        assert_eq!(file, PathBuf::from("./cover.png"));
        assert_eq!(name.as_deref(), Some("books/12/cover.png"));
    }
}
