//! docket API server binary.
//!
//! This binary creates the concrete store implementation and passes it
//! to the API server. The API layer remains agnostic of the backend.

use std::net::IpAddr;

use clap::Parser;
use docket::api::{self, ApiError, Config};
use docket::config::Settings;
use docket::store::MemoryStore;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("API server error: {0}")]
    #[diagnostic(code(docket::binary::api))]
    Api(#[from] ApiError),
}

#[derive(Parser)]
#[command(name = "docket")]
#[command(author, version, about = "docket API server", long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value = "8000")]
    port: u16,

    /// Reject all mutating requests (in addition to READ_ONLY_MODE)
    #[arg(long)]
    read_only: bool,
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();

    let mut settings = Settings::from_env();
    if cli.read_only {
        settings.read_only = true;
    }

    // The demo store ships pre-seeded with three sample records.
    let store = MemoryStore::with_samples();

    api::run(
        Config {
            host: cli.host,
            port: cli.port,
        },
        store,
        settings,
    )
    .await?;

    Ok(())
}
