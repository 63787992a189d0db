use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cursive::event::Event;
use tracing::{debug, info};

use budget_ui::{AppConfig, AppState, logging, views};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Budget analysis wizard for the terminal.
///
/// Sign in, pick the figures you have and the insights you want, enter the
/// numbers, and review projected profit, revenue, expenses and runtime with
/// advice on the result.
#[derive(Debug, Parser)]
#[command(name = "BudgetWise", version)]
struct Cli {
    /// TOML file with [calculation], [advice] and [logging] sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `info,budget_core=trace`.
    /// Overrides the config file; `RUST_LOG` overrides both.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Also log to stdout. Output interleaves with the terminal UI.
    #[arg(long)]
    log_stdout: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(cli.config.as_deref())
        .context("failed to load configuration")?;

    let level = cli.log_level.as_deref().or(config.logging.level.as_deref());
    logging::init_logging(level, cli.log_stdout || config.logging.stdout)?;
    if let Some(path) = cli.log_file.as_ref().or(config.logging.file.as_ref()) {
        logging::enable_file_logging(path)?;
    }

    info!(app = logging::app_name(), "starting");
    debug!(?config, "configuration loaded");

    let state = AppState::new(config).context("invalid dashboard settings")?;

    let mut siv = cursive::default();
    siv.set_user_data(state);
    siv.add_global_callback(Event::CtrlChar('q'), |s| s.quit());

    views::show_login(&mut siv);
    siv.run();

    info!("exiting");
    logging::disable_file_logging();
    Ok(())
}
