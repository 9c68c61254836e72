//! Catalog maintenance commands
//!
//! Usage: devcon catalog show <PATH>
//!        devcon catalog convert <INPUT> <OUTPUT>

use clap::{Args, Subcommand};
use devcon_core::{CatalogSink, CatalogSource};
use devcon_store::FileCatalog;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Debug, Subcommand)]
pub enum CatalogCommand {
    /// Print the numbered command listing
    Show(ShowArgs),
    /// Load a catalog and save it in the format of the output extension
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Catalog file (.xml, .yaml, .yml or .json)
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Catalog to read
    pub input: PathBuf,

    /// Destination; the extension picks the format
    pub output: PathBuf,
}

/// Execute catalog command
pub fn execute(args: CatalogArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        CatalogCommand::Show(show_args) => execute_show(show_args),
        CatalogCommand::Convert(convert_args) => execute_convert(convert_args),
    }
}

fn execute_show(args: ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = FileCatalog::new(args.path).load()?;

    if catalog.is_empty() {
        println!("(no commands)");
        return Ok(());
    }
    for line in catalog.listing() {
        println!("{}", line);
    }
    for name in catalog.duplicate_names() {
        eprintln!("warning: '{}' is declared more than once; only the first is used", name);
    }

    Ok(())
}

fn execute_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = FileCatalog::new(&args.input).load()?;
    FileCatalog::new(&args.output).save(&catalog)?;

    println!(
        "Converted {} command(s) to {}",
        catalog.len(),
        args.output.display()
    );
    Ok(())
}
