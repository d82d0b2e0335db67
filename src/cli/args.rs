//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `show`: print a language file's metadata and section overview
//! - `get`: look up a single translation, expanded by default
//! - `dump`: re-serialize a parsed language file as borr text or JSON

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print a language file's metadata and section overview
    Show(ShowCommand),
    /// Look up a single translation
    Get(GetCommand),
    /// Re-serialize a parsed language file
    Dump(DumpCommand),
}

#[derive(Debug, Args)]
pub struct ShowCommand {
    /// The language file to parse
    pub file: PathBuf,

    /// Also report lines the permissive parser skipped
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// The language file to parse
    pub file: PathBuf,

    /// Section to look in
    pub section: String,

    /// Field to look up
    pub field: String,

    /// Print the stored value without expanding variables
    #[arg(long)]
    pub raw: bool,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// The language file to parse
    pub file: PathBuf,

    /// Emit JSON instead of borr text
    #[arg(long)]
    pub json: bool,
}
