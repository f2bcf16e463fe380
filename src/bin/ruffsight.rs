// src/bin/ruffsight.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use ruffsight_core::cli::{self, Cli};
use ruffsight_core::error::RuffsightError;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        // Invalid report input gets its own exit code so callers can tell
        // "bad report" apart from other failures.
        let code = match e.downcast_ref::<RuffsightError>() {
            Some(RuffsightError::InvalidReport) => 2,
            _ => 1,
        };
        process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::handle(&cli)?;
    Ok(())
}
