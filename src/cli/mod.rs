//! Command-line demo layer.
//!
//! The library itself never touches the filesystem or prints anything;
//! reading files and reporting results both live here.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::document::Document;

mod args;
mod exit_status;

pub use args::{Arguments, Command, DumpCommand, GetCommand, ShowCommand};
pub use exit_status::ExitStatus;

/// Reads and parses a language file.
pub fn read_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read language file: {}", path.display()))?;
    Document::parse(&text)
        .with_context(|| format!("Failed to parse language file: {}", path.display()))
}

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Show(cmd)) => show(&cmd),
        Some(Command::Get(cmd)) => get(&cmd),
        Some(Command::Dump(cmd)) => dump(&cmd),
        None => Ok(ExitStatus::Success),
    }
}

fn show(cmd: &ShowCommand) -> Result<ExitStatus> {
    let text = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read language file: {}", cmd.file.display()))?;
    let (doc, warnings) = Document::parse_with_warnings(&text)
        .with_context(|| format!("Failed to parse language file: {}", cmd.file.display()))?;

    println!("{} {}", "Language:".bold(), doc.lang_id());
    println!("{} {}", "Description:".bold(), doc.lang_description());
    println!("{} {}", "Version:".bold(), doc.lang_version());
    for (name, section) in doc.sections() {
        println!("  [{}] {} fields", name.cyan(), section.len());
    }

    if cmd.strict {
        for warning in &warnings {
            eprintln!(
                "{}: line {}: {}",
                "warning".bold().yellow(),
                warning.line,
                warning.message
            );
        }
    }

    Ok(ExitStatus::Success)
}

fn get(cmd: &GetCommand) -> Result<ExitStatus> {
    let doc = read_document(&cmd.file)?;

    let value = if cmd.raw {
        doc.raw_field(&cmd.section, &cmd.field).map(str::to_string)
    } else {
        doc.field(&cmd.section, &cmd.field)?
    };

    match value {
        Some(value) => {
            println!("{value}");
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!(
                "{}: no translation for {}:{}",
                "not found".bold().red(),
                cmd.section,
                cmd.field
            );
            Ok(ExitStatus::Failure)
        }
    }
}

fn dump(cmd: &DumpCommand) -> Result<ExitStatus> {
    let doc = read_document(&cmd.file)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", doc.to_source());
    }

    Ok(ExitStatus::Success)
}
