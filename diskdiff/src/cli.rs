// src/cli.rs
use crate::models::EnabledKinds;
use clap::Parser;
use std::path::PathBuf;

/// Show disk changes caused by an operation.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Command to execute. Alternatively, the keyword "manual"
    #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,

    /// Skip files born during the operation (included by default)
    #[arg(short = 'b', long)]
    pub no_born: bool,

    /// Skip files modified during the operation (included by default)
    #[arg(short = 'm', long)]
    pub no_modified: bool,

    /// Include files whose metadata changed during the operation
    #[arg(short = 'c', long)]
    pub changed: bool,

    /// Include files accessed during the operation
    #[arg(short = 'a', long)]
    pub accessed: bool,

    /// Add a directory to check, overriding the configured roots
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    pub dirs: Vec<PathBuf>,

    /// Skip any file path containing this keyword
    #[arg(long, value_name = "KEYWORD")]
    pub dodge: Vec<String>,

    /// Path to a TOML configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Resolves the four toggle flags into the detector's enable set.
    #[must_use]
    pub const fn enabled_kinds(&self) -> EnabledKinds {
        EnabledKinds {
            born: !self.no_born,
            modified: !self.no_modified,
            changed: self.changed,
            accessed: self.accessed,
        }
    }

    /// True when the first word selects manual mode instead of a command.
    #[must_use]
    pub fn manual_mode(&self) -> bool {
        self.command
            .first()
            .is_some_and(|word| word == "man" || word == "manual")
    }
}
