//! devcon CLI
//!
//! Terminal host for the developer console

use clap::{Parser, Subcommand};

mod commands;
mod view;

#[derive(Debug, Parser)]
#[command(name = "devcon")]
#[command(about = "devcon - In-app developer console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Catalog maintenance (show, convert)
    Catalog(commands::catalog::CatalogArgs),
    /// Interactive console reading lines from stdin
    Repl(commands::repl::ReplArgs),
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::execute(args),
        Commands::Repl(args) => commands::repl::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
