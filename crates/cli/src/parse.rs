//! ArgMatches → action conversion.
//!
//! Translates clap's parsed arguments into a `CliAction`, and recognizes
//! the REPL-only meta-commands before clap sees the line.

use std::path::PathBuf;

use clap::ArgMatches;

/// A finder operation requested by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    /// Index files by file name
    Add { paths: Vec<PathBuf> },
    /// Add noise words from a file
    Noise { path: PathBuf },
    /// Search for terms
    Find { terms: Vec<String> },
    /// Complete a word prefix
    Complete { prefix: String },
    /// Print a document's content
    Show { name: String },
    /// List document names
    Docs,
    /// Drop everything
    Clear,
}

/// REPL meta-commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaCommand {
    Help { command: Option<String> },
    Quit,
}

/// Recognize a meta-command line.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help {
            command: parts.next().map(str::to_string),
        }),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "add" => Ok(CliAction::Add {
            paths: values(sub, "files").into_iter().map(PathBuf::from).collect(),
        }),
        "noise" => Ok(CliAction::Noise {
            path: PathBuf::from(required(sub, "file")?),
        }),
        "find" => Ok(CliAction::Find {
            terms: values(sub, "terms"),
        }),
        "complete" => Ok(CliAction::Complete {
            prefix: required(sub, "prefix")?,
        }),
        "show" => Ok(CliAction::Show {
            name: required(sub, "name")?,
        }),
        "docs" => Ok(CliAction::Docs),
        "clear" => Ok(CliAction::Clear),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required(matches: &ArgMatches, id: &str) -> Result<String, String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .ok_or_else(|| format!("Missing argument: {}", id))
}

fn values(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default()
}
