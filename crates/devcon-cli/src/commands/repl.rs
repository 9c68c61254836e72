//! Interactive console
//!
//! Usage: devcon repl [--catalog <PATH>] [--config <PATH>] [--log-capacity <N>]
//!
//! Reads one line per submission from stdin. Dispatched commands are echoed
//! as they arrive on a channel subscription; the log panel shows everything
//! the console captured, including its own diagnostics.

use clap::Args;
use devcon_core::logging_facility::init_with_sink;
use devcon_core::{CommandManager, ConsoleConfig, SubmitOutcome};
use devcon_store::FileCatalog;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::view::{ConsoleView, ViewAction};

#[derive(Debug, Args)]
pub struct ReplArgs {
    /// Catalog file; overrides `catalog_path` from the config
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum retained log entries; overrides `log_capacity`
    #[arg(long)]
    pub log_capacity: Option<usize>,

    /// Do not log unknown commands to the console
    #[arg(long)]
    pub no_diagnostics: bool,
}

fn resolve_config(args: &ReplArgs) -> Result<ConsoleConfig, Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };
    if args.catalog.is_some() {
        config.catalog_path = args.catalog.clone();
    }
    if args.log_capacity.is_some() {
        config.log_capacity = args.log_capacity;
    }
    if args.no_diagnostics {
        config.diagnostics = false;
    }
    Ok(config)
}

/// Execute repl command
pub fn execute(args: ReplArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(&args)?;
    let mut manager = CommandManager::new(&config);
    init_with_sink(config.profile, manager.log_sink().clone());

    if let Some(path) = &config.catalog_path {
        // A broken catalog leaves the console usable for logging
        if let Err(e) = manager.load_catalog(&FileCatalog::new(path)) {
            eprintln!("warning: {}", e);
        }
    }
    tracing::info!(commands = manager.catalog().len(), "console ready");

    let (_subscription, dispatched) = manager.subscribe_channel();
    let mut view = ConsoleView::new();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    view.draw(&mut out, &manager)?;
    for line in stdin.lock().lines() {
        let line = line?;
        match view.handle_line(line.trim_end_matches('\r'), &manager) {
            ViewAction::Quit => break,
            ViewAction::Redraw => {}
            ViewAction::Notice(text) => writeln!(out, "{}", text)?,
            ViewAction::Submit(text) => {
                if let SubmitOutcome::NotACommand = manager.submit(&text) {
                    writeln!(out, "{}", text)?;
                }
                for call in dispatched.try_iter() {
                    writeln!(out, "→ {} {}", call.command.name, call.args.join(" "))?;
                }
            }
        }
        view.draw(&mut out, &manager)?;
        out.flush()?;
    }

    Ok(())
}
