pub mod config;
pub mod output;
pub mod statusline;

use clap::{Parser, Subcommand};

/// Multi-line statusline for AI coding sessions
#[derive(Parser)]
#[command(name = "glint", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the statusline from session JSON on stdin
    Statusline(statusline::Args),

    /// Show the effective configuration
    Config(config::Args),
}

/// Initialize tracing to stderr. `GLINT_LOG` (an env-filter directive) wins
/// over `level`; unknown levels fall back to `warn`. Stdout is reserved for
/// the statusline itself.
pub fn init_logging(level: Option<&str>) {
    let level = level.unwrap_or("warn");
    let filter = match level {
        "off" | "error" | "warn" | "info" | "debug" => level,
        other => {
            eprintln!(
                "warning: unknown log level '{}', defaulting to 'warn'",
                other
            );
            "warn"
        }
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_env("GLINT_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .try_init();
}
