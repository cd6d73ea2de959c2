//! Movie Catalog Cache - Entry Point
//!
//! Lives in the `mcc` facade crate so the binary and the library docs do not
//! collide.

// Force-link mcc-providers to ensure linkme registrations are included
extern crate mcc_providers;

use clap::Parser;
use mcc_server::run;

/// Command line interface for Movie Catalog Cache
#[derive(Parser, Debug)]
#[command(name = "mcc")]
#[command(about = "Movie Catalog Cache - read-through catalog cache and trending API server")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    ///
    /// Without it, `mcc.toml` is looked up in the working directory,
    /// `./mcc/`, the user config directory and `~/.mcc/`.
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    run(cli.config.as_deref()).await
}
