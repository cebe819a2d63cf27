//! modreg - Entry Point

use clap::Parser;
use modreg::api::HttpTransport;
use modreg::model::AppError;
use modreg::view::{ColorConfig, RunOptions};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// modreg - terminal client for browsing and moderating a module registry
#[derive(Parser, Debug)]
#[command(name = "modreg")]
#[command(version)]
#[command(about = "Terminal client for browsing and moderating a module registry")]
pub struct Args {
    /// Registry base URL (e.g. http://localhost:8080)
    #[arg(long)]
    pub server: Option<String>,

    /// Modules per page (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Run a full-text search on startup
    #[arg(short, long)]
    pub search: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = modreg::config::load_config_with_precedence(args.config.clone())?;
        let merged = modreg::config::merge_config(config_file);
        let with_env = modreg::config::apply_env_overrides(merged)?;
        let page_size = args.page_size.map(|n| n as usize);
        modreg::config::apply_cli_overrides(with_env, args.server.clone(), page_size).validate()?
    };

    modreg::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let transport = HttpTransport::new(&config.server_url, config.request_timeout())?;

    let options = RunOptions {
        page_size: config.page_size,
        initial_search: args.search,
        colors: ColorConfig::from_env_and_args(args.no_color),
    };

    modreg::view::run_with_transport(Arc::new(transport), options)?;

    info!("Exiting");
    Ok(())
}
