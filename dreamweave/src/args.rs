use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Dreamweave dream-to-story service
#[derive(Debug, Parser)]
#[command(name = "dreamweave", about = "Turns recorded dreams into short stories")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "dreamweave.toml", env = "DREAMWEAVE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "DREAMWEAVE_LISTEN")]
    pub listen: Option<SocketAddr>,
}
