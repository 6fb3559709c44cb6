#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "SALLM utilities - trunk must be installed")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    #[command(about = "Build the frontend and serve it")]
    Launch,
    #[command(about = "Build a release bundle under SALLM/")]
    Dist { target_triple: Option<String> },
}
