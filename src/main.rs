//! bizlens - Entry Point

use bizlens::config::CliOverrides;
use bizlens::executor::RequestExecutor;
use bizlens::view::{ColorConfig, LaunchOptions};
use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};

/// bizlens - search local businesses from the terminal
#[derive(Parser, Debug)]
#[command(name = "bizlens")]
#[command(version)]
#[command(about = "Terminal client for a local business search API")]
pub struct Args {
    /// What to search for, e.g. "pizza"
    #[arg(short, long)]
    pub query: Option<String>,

    /// Where to search, e.g. "Seattle, WA"
    #[arg(short, long)]
    pub location: Option<String>,

    /// Maximum number of results to request (must be positive)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u32).range(1..))]
    pub limit: Option<u32>,

    /// Result language code
    #[arg(long)]
    pub language: Option<String>,

    /// Base URL of the search backend
    #[arg(long)]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Check that the backend is healthy and exit
    #[arg(long)]
    pub check: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_base_url: self.api_url.clone(),
            request_timeout_secs: self.timeout,
            default_limit: self.limit,
            default_language: self.language.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = bizlens::config::resolve(args.config.clone(), args.overrides())?;

    bizlens::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    if args.check {
        let executor = RequestExecutor::new(&config.api_base_url, config.request_timeout())?;
        return match executor.check_health() {
            Ok(status) => {
                println!("{} is {}", config.api_base_url, status);
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "health check failed");
                Err(err.into())
            }
        };
    }

    let options = LaunchOptions {
        config,
        color: ColorConfig::from_env_and_args(args.no_color),
        query: args.query,
        location: args.location,
    };

    bizlens::view::run_with_config(options)?;

    Ok(())
}
