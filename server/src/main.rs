//! Rickdex server binary entry point.

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use color_eyre::eyre::Result;
use server::ServerConfig;

/// Command-line interface for the Rickdex server.
#[derive(Parser)]
#[command(
    name = "rickdex-server",
    version,
    about = "Serve the built Rickdex character browser"
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "RICKDEX_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on (overrides the config file)
    #[arg(short, long)]
    addr: Option<SocketAddr>,

    /// Directory with the built site (overrides the config file)
    #[arg(long)]
    site_root: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    server::init_tracing(cli.verbose);

    let config =
        ServerConfig::load(cli.config.as_deref())?.with_overrides(cli.addr, cli.site_root);
    config.validate()?;

    server::server::serve(&config).await?;

    Ok(())
}
