//! Clap command tree definition.
//!
//! Builds the `clap::Command` tree used by both shell mode (directly)
//! and REPL mode (via `try_get_matches_from`).

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("docfinder")
        .about("Index text documents, search them and complete words")
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Config file (TOML); default is an in-memory index")
                .global(true),
        )
        .arg(
            Arg::new("noise")
                .long("noise")
                .short('n')
                .help("File of noise words, one per line")
                .global(true),
        )
        .arg(
            Arg::new("doc")
                .long("doc")
                .short('d')
                .help("Document file to index before running (repeatable)")
                .action(ArgAction::Append)
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommands(finder_commands())
        .subcommand(build_init())
}

/// `init` writes a config file and exits; it never opens a finder.
fn build_init() -> Command {
    Command::new("init")
        .about("Write docfinder.toml (or the --config path) if it does not exist")
        .arg(
            Arg::new("disk")
                .long("disk")
                .value_name("DIR")
                .help("Configure a disk store in DIR instead of the commented default"),
        )
}

/// Build the command tree for a single REPL/pipe line.
///
/// Lines carry no binary name, so the first token is the command.
pub fn build_repl_cmd() -> Command {
    Command::new("docfinder")
        .no_binary_name(true)
        .subcommand_required(true)
        .disable_help_subcommand(true)
        .subcommands(finder_commands())
}

/// Names of every finder command, for TAB completion
pub const COMMAND_NAMES: &[&str] = &["add", "noise", "find", "complete", "show", "docs", "clear"];

fn finder_commands() -> Vec<Command> {
    vec![
        Command::new("add")
            .about("Index files; each document is named after its file")
            .arg(
                Arg::new("files")
                    .required(true)
                    .num_args(1..)
                    .help("Files to index"),
            ),
        Command::new("noise")
            .about("Add every line of a file as a noise word")
            .arg(Arg::new("file").required(true).help("Noise word file")),
        Command::new("find")
            .about("Rank documents containing any of the terms")
            .arg(
                Arg::new("terms")
                    .required(true)
                    .num_args(1..)
                    .help("Search terms; normalized before lookup"),
            ),
        Command::new("complete")
            .about("List indexed words starting with a prefix")
            .arg(Arg::new("prefix").required(true).help("Word prefix")),
        Command::new("show")
            .about("Print the content of a document")
            .arg(Arg::new("name").required(true).help("Document name")),
        Command::new("docs").about("List indexed document names"),
        Command::new("clear").about("Drop every document, word and noise word"),
    ]
}
