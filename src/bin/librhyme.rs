//! librhyme - Phonetic rhyme matching over pronunciation dictionaries
//!
//! Provides CLI utilities for rhyme queries and lexicon snapshots.

use clap::Parser;
use colored::Colorize;
use std::process;
use tracing_subscriber::{fmt, EnvFilter};

use librhyme::cli::commands;
use librhyme::cli::Cli;

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = commands::execute(cli.command, cli.config) {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
