mod cli;
mod config;
mod error;
mod render;
mod session;
mod sources;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Statusline(args) => cli::statusline::run(args),
        Command::Config(args) => cli::config::run(args),
    }
}
