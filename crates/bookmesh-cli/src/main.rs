#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;

use std::path::Path;
use std::process;

use anyhow::Context;
use bookmesh_opendal::StorageClient;

use crate::config::{Cli, Command};

// Tracing target constants
pub const TRACING_TARGET_STARTUP: &str = "bookmesh_cli::startup";
pub const TRACING_TARGET_UPLOAD: &str = "bookmesh_cli::upload";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_STARTUP,
            error = %error,
            "application terminated with error"
        );
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    log_startup_info();

    let client = StorageClient::new(cli.storage.to_config())
        .context("failed to initialize storage client")?;

    match cli.command {
        Command::Upload { file, name } => upload(&client, &file, name).await?,
    }

    Ok(())
}

/// Uploads one file and prints its durable URL.
async fn upload(client: &StorageClient, file: &Path, name: Option<String>) -> anyhow::Result<()> {
    let name = match name {
        Some(name) => name,
        None => default_object_name(file)?,
    };

    let data = tokio::fs::read(file)
        .await
        .with_context(|| format!("failed to read {}", file.display()))?;

    tracing::info!(
        target: TRACING_TARGET_UPLOAD,
        file = %file.display(),
        name = %name,
        size = data.len(),
        "uploading file"
    );

    let location = client
        .upload(&name, &data)
        .await
        .with_context(|| format!("failed to upload {}", file.display()))?;

    println!("{location}");

    Ok(())
}

/// Derives the object name from the file path.
fn default_object_name(file: &Path) -> anyhow::Result<String> {
    file.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_owned)
        .with_context(|| format!("cannot derive an object name from {}", file.display()))
}

/// Logs startup information.
fn log_startup_info() {
    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        pid = process::id(),
        arch = std::env::consts::ARCH,
        os = std::env::consts::OS,
        "build information"
    );
}
