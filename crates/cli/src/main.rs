//! docfinder CLI: index text files, search them, complete words.
//!
//! Three modes:
//! - **Shell mode**: `docfinder [flags] COMMAND` runs one command and exits
//! - **REPL mode**: `docfinder [flags]` opens an interactive prompt (stdin is a TTY)
//! - **Pipe mode**: `echo "find cat" | docfinder -d notes.txt` runs stdin line by line
//!
//! Without `--config`, `./docfinder.toml` is used when present;
//! `docfinder init` writes one.
//!
//! Logging goes to stderr and is controlled by `DOCFINDER_LOG`
//! (an `EnvFilter` directive, default `warn`).

mod commands;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;

use docfinder_search::{DocFinder, FinderConfig, CONFIG_FILE_NAME};
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_output, OutputMode};
use parse::matches_to_action;
use state::SessionState;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // `init` runs before any finder is opened.
    if let Some(("init", sub)) = matches.subcommand() {
        process::exit(run_init(&matches, sub, mode));
    }

    let finder = match open_finder(&matches) {
        Ok(finder) => finder,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    };
    let state = SessionState::new(finder);

    if let Some(docs) = matches.get_many::<String>("doc") {
        for doc in docs {
            if let Err(e) = state.add_file(Path::new(doc)) {
                eprintln!("{}", format_error(&e, mode));
                process::exit(1);
            }
        }
    }

    if matches.subcommand().is_some() {
        process::exit(run_shell_mode(&matches, &state, mode));
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&state, mode);
    } else {
        process::exit(repl::run_pipe(&state, mode));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("DOCFINDER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn open_finder(matches: &clap::ArgMatches) -> docfinder_core::Result<DocFinder> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => FinderConfig::from_file(Path::new(path))?,
        None => FinderConfig::load_or_default(Path::new("."))?,
    };
    if let Some(noise) = matches.get_one::<String>("noise") {
        config.noise_words = Some(PathBuf::from(noise));
    }
    DocFinder::open(&config)
}

fn run_init(matches: &clap::ArgMatches, sub: &clap::ArgMatches, mode: OutputMode) -> i32 {
    let path = matches
        .get_one::<String>("config")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let disk = sub.get_one::<String>("disk").map(Path::new);

    match init_config(&path, disk) {
        Ok(true) => {
            println!("Wrote {}", path.display());
            0
        }
        Ok(false) => {
            println!("{} already exists", path.display());
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}

/// Write a config to `path` unless one exists. Returns whether it wrote.
fn init_config(path: &Path, disk: Option<&Path>) -> docfinder_core::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    match disk {
        Some(dir) => FinderConfig::disk(dir).write_to_file(path)?,
        None => FinderConfig::write_default_if_missing(path)?,
    }
    Ok(true)
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &SessionState, mode: OutputMode) -> i32 {
    let action = match matches_to_action(matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            return 1;
        }
    };
    match state.execute(action) {
        Ok(output) => {
            println!("{}", format_output(&output, mode));
            0
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            1
        }
    }
}
