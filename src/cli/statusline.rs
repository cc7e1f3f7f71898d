use std::time::Duration;

use anyhow::Result;
use clap::Args as ClapArgs;

use crate::cli::init_logging;
use crate::config::{self, StatuslineConfig};
use crate::render::{RenderOptions, Renderer};
use crate::session::SessionInput;
use crate::sources::{GitCli, Offline, SystemClock, WeatherProvider, WttrClient};

/// Arguments for the `glint statusline` subcommand.
#[derive(ClapArgs)]
pub struct Args {
    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,

    /// Use ASCII-only characters for the gauge
    #[arg(long)]
    pub no_unicode: bool,

    /// Blink the partial gauge segment
    #[arg(long)]
    pub blink: bool,

    /// Always show the branch line, plus weather and working directory
    #[arg(long)]
    pub extra: bool,

    /// Weather request timeout in milliseconds
    #[arg(long)]
    pub weather_timeout_ms: Option<u64>,

    /// Logging verbosity for stderr: off, error, warn, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Entry point. Wraps `run_inner` in `catch_unwind` so that panics
/// are swallowed and the process always exits 0.
pub fn run(args: Args) -> Result<()> {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| run_inner(args)));

    match result {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => {
            tracing::warn!("statusline failed: {:#}", e);
            println!();
            Ok(())
        }
        Err(_) => {
            println!();
            Ok(())
        }
    }
}

fn run_inner(args: Args) -> Result<()> {
    init_logging(args.log_level.as_deref());

    // The assistant pipes stdout (not a TTY), so colored would normally
    // disable colors. Force them on unless --no-color or NO_COLOR is set.
    if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    } else {
        colored::control::set_override(true);
    }

    let mut config = config::load_lenient();
    apply_args(&mut config, &args);

    let session = SessionInput::from_stdin();

    let git = GitCli::detect();
    let clock = SystemClock;
    let wttr = if config.show_extra {
        let timeout = Duration::from_millis(config.weather_timeout_ms);
        WttrClient::new(&config.weather_url, timeout)
            .map_err(|e| tracing::debug!("weather client: {}", e))
            .ok()
    } else {
        None
    };
    let weather: &dyn WeatherProvider = match &wttr {
        Some(client) => client,
        None => &Offline,
    };

    let options = RenderOptions::from_config(&config, !args.no_unicode);
    let renderer = Renderer::new(options, &git, weather, &clock);

    for line in renderer.render(&session) {
        println!("{}", line);
    }

    Ok(())
}

/// CLI flags win over file and environment settings.
fn apply_args(config: &mut StatuslineConfig, args: &Args) {
    if args.blink {
        config.blink = true;
    }
    if args.extra {
        config.show_extra = true;
    }
    if let Some(ms) = args.weather_timeout_ms {
        config.weather_timeout_ms = ms;
    }
}
