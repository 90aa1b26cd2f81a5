//! Application run modes: logger init, generate, check, lookup, completions.

use std::io::{self, Write};

use clap::CommandFactory;

use crate::cli::{self, Args};
use crate::core::app;
use crate::core::catalog::{self, Catalog};
use crate::core::codegen;
use crate::core::config::GenConfig;
use crate::core::error::GenError;
use crate::core::output;

/// Initialize env_logger on stderr; stdout carries the catalog dump and lookup results.
pub fn init_logger(args: &Args) {
    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    );
    logger.target(env_logger::Target::Stderr);
    let _ = logger.try_init();
}

/// Read the catalog, replace the output file with its declaration, and dump the catalog.
pub fn run_generate(config: &GenConfig) -> Result<(), GenError> {
    let catalog = catalog::load(&config.input)?;
    let declaration = codegen::render(&catalog, config.name_style);
    output::write_replacing(&config.output, &declaration)?;
    log::info!(
        "wrote {} champions to {}",
        catalog.len(),
        config.output.display()
    );
    print_catalog(&catalog)
}

/// Compare the output file against a fresh render without touching it.
pub fn run_check(config: &GenConfig) -> Result<(), GenError> {
    let catalog = catalog::load(&config.input)?;
    let declaration = codegen::render(&catalog, config.name_style);
    match output::read_existing(&config.output)? {
        Some(existing) if existing == declaration => {
            println!("{} is up to date", config.output.display());
            Ok(())
        }
        existing => {
            if existing.is_none() {
                log::warn!("{} does not exist", config.output.display());
            }
            Err(GenError::Stale {
                path: config.output.clone(),
            })
        }
    }
}

/// Print the name for a numeric key, or the key for an exact name.
pub fn run_lookup(config: &GenConfig, query: &str) -> Result<(), GenError> {
    let catalog = catalog::load(&config.input)?;
    let found = catalog
        .lookup(query)
        .ok_or_else(|| GenError::NotFound(query.to_string()))?;
    println!("{}", found);
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn run_completions(shell: clap_complete::Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
}

fn print_catalog(catalog: &Catalog) -> Result<(), GenError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, catalog)
        .map_err(io::Error::from)
        .and_then(|()| writeln!(out))
        .map_err(|e| GenError::io("<stdout>", e))
}
