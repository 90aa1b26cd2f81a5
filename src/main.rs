//! # champion-list-gen
//!
//! Build-time generator for the champion lookup table. Reads a Data Dragon
//! `champion.json` and writes `list.rs`, a `pub(crate) const LIST: [(u32, &str); N]`
//! of (key, name) pairs in document order.
//!
//! ## Usage
//! - No arguments: `champion.json` -> `list.rs` in the current directory
//! - `check`: verify `list.rs` is current (for CI)
//! - `lookup <key|name>`: resolve one champion
//! - `completions <shell>`: shell completion script

mod cli;
mod core;
mod run;

use clap::Parser;

use crate::cli::{Args, Commands};
use crate::core::config::GenConfig;
use crate::core::error::GenError;

fn main() {
    let args = Args::parse();
    run::init_logger(&args);
    log::debug!("{} {}", core::app::NAME, core::app::VERSION);

    // User-facing message uses Display, not Debug
    if let Err(e) = dispatch(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(args: Args) -> Result<(), GenError> {
    let Args {
        command,
        input,
        output,
        verbatim_names,
        ..
    } = args;
    let config = move || GenConfig::new(input, output, verbatim_names);

    match command {
        Some(Commands::Completions { shell }) => {
            run::run_completions(shell);
            Ok(())
        }
        Some(Commands::Check) => run::run_check(&config()?),
        Some(Commands::Lookup { query }) => run::run_lookup(&config()?, &query),
        Some(Commands::Generate) | None => run::run_generate(&config()?),
    }
}
