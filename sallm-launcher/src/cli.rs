#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Serves the SALLM Interaction Interface")]
pub struct Cli {
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,
    /// Directory produced by `trunk build`.
    #[arg(long, default_value = "dist")]
    pub dist_dir: PathBuf,
}
