use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use crate::cli::{init_logging, output};
use crate::config;

#[derive(ClapArgs)]
pub struct Args {
    /// Print only the config file path
    #[arg(long)]
    pub path: bool,
}

/// Print the effective configuration (file, blink marker and environment
/// merged) as TOML on stdout.
pub fn run(args: Args) -> Result<()> {
    init_logging(None);

    let path = config::config_path();

    if args.path {
        let path = path.context("could not determine config directory")?;
        println!("{}", path.display());
        return Ok(());
    }

    match &path {
        Some(p) if p.exists() => {}
        Some(p) => output::info(&format!(
            "no config file at {}, showing defaults",
            p.display()
        )),
        None => output::info("no config directory, showing defaults"),
    }

    let effective = config::load()?;
    print!("{}", toml::to_string_pretty(&effective)?);
    Ok(())
}
