//! ArbiSight - Entry Point

use arbisight::model::{ChartKind, SortField};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// ArbiSight - terminal dashboard for CLI command execution logs
#[derive(Parser, Debug)]
#[command(name = "arbisight")]
#[command(version)]
#[command(about = "Browse, filter and sort a log of executed CLI commands")]
pub struct Args {
    /// Path to a JSON array or JSONL command log (reads piped stdin if not provided)
    pub file: Option<PathBuf>,

    /// Show the built-in demo data, ignoring FILE and stdin
    #[arg(long)]
    pub demo: bool,

    /// Start with a search term applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Start filtered to one subcommand
    #[arg(long)]
    pub subcommand: Option<String>,

    /// Sort by this field on startup (same field as the default flips direction)
    #[arg(long, value_name = "FIELD")]
    pub sort: Option<SortField>,

    /// Subcommand chart style: bar or breakdown
    #[arg(long, value_name = "KIND")]
    pub chart: Option<ChartKind>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = arbisight::config::load_config_with_precedence(args.config.clone())?;
        let merged = arbisight::config::merge_config(config_file)?;
        let with_env = arbisight::config::apply_env_overrides(merged)?;
        arbisight::config::apply_cli_overrides(with_env, args.chart)
    };

    // The TUI owns the terminal, so logs only ever go to the file
    if let Err(e) = arbisight::logging::init(&config.log_file_path) {
        eprintln!("warning: logging disabled: {e}");
    }

    info!(config = ?config, "Configuration loaded and resolved");

    let input_source = arbisight::source::detect_input_source(args.file.clone(), args.demo)?;

    let options = arbisight::view::StartupOptions {
        config,
        search: args.search,
        subcommand: args.subcommand,
        sort: args.sort,
        colors: arbisight::view::ColorConfig::from_env_and_args(args.no_color),
    };

    arbisight::view::run_with_source(input_source, options)?;

    Ok(())
}
