//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  champion-list-gen                     Read champion.json, write list.rs
  champion-list-gen -o src/list.rs      Write the declaration elsewhere
  champion-list-gen check               Fail if list.rs is out of date
  champion-list-gen lookup 523          Print the name for a champion key
  champion-list-gen lookup Aphelios     Print the key for a champion name
  champion-list-gen completions bash    Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Generate a Rust champion (key, name) table from Data Dragon champion.json",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Source JSON (default: champion.json)
    #[arg(short = 'i', long, global = true)]
    pub input: Option<PathBuf>,

    /// Generated Rust file (default: list.rs)
    #[arg(short = 'o', long, global = true)]
    pub output: Option<PathBuf>,

    /// Copy names into the string literals without escaping
    #[arg(long, global = true)]
    pub verbatim_names: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the declaration (same as running without a subcommand)
    Generate,
    /// Exit non-zero if the output file does not match what would be generated
    Check,
    /// Resolve a champion key to its name, or a name to its key
    Lookup {
        /// Numeric key or exact champion name
        query: String,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
