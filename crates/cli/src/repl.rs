//! REPL loop with rustyline.
//!
//! Interactive mode: prompt, meta-commands, history, TAB completion of
//! command names and indexed words.
//! Pipe mode: read lines from stdin, execute each.

use std::io::{self, BufRead};
use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use tracing::debug;

use docfinder_search::{completion_fragment, normalize, DocFinder};

use crate::commands::{build_repl_cmd, COMMAND_NAMES};
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, MetaCommand};
use crate::state::SessionState;

const PROMPT: &str = "docfinder> ";

/// Run the interactive REPL.
pub fn run_repl(state: &SessionState, mode: OutputMode) {
    let config = Config::builder()
        .history_ignore_space(true)
        .completion_type(CompletionType::List)
        .build();

    let mut rl: Editor<FinderHelper, _> = match Editor::with_config(config) {
        Ok(rl) => rl,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    rl.set_helper(Some(FinderHelper::new(state.finder())));

    let history_path = history_file();
    if let Some(ref path) = history_path {
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(trimmed);

                if let Some(meta) = check_meta_command(trimmed) {
                    match meta {
                        MetaCommand::Quit => break,
                        MetaCommand::Help { command } => print_help(command.as_deref()),
                    }
                    continue;
                }

                execute_line(trimmed, state, mode);
            }
            // Ctrl-C
            Err(ReadlineError::Interrupted) => continue,
            // Ctrl-D
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("(error) {:?}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        let _ = rl.save_history(path);
    }
}

/// Run in pipe mode: read lines from stdin, execute each.
///
/// Blank lines and `#` comments are skipped. Returns the process exit
/// code: 1 if any line failed.
pub fn run_pipe(state: &SessionState, mode: OutputMode) -> i32 {
    let stdin = io::stdin();
    let mut exit_code = 0;

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if !execute_line(trimmed, state, mode) {
            exit_code = 1;
        }
    }

    exit_code
}

/// Tokenize, parse and execute one line. Returns true on success.
fn execute_line(line: &str, state: &SessionState, mode: OutputMode) -> bool {
    let tokens = match shlex::split(line) {
        Some(t) if !t.is_empty() => t,
        Some(_) => return true,
        None => {
            eprintln!("(error) Invalid quoting: {}", line);
            return false;
        }
    };

    let matches = match build_repl_cmd().try_get_matches_from(tokens) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{}", e);
            return false;
        }
    };

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("(error) {}", e);
            return false;
        }
    };

    match state.execute(action) {
        Ok(output) => {
            println!("{}", format_output(&output, mode));
            true
        }
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            false
        }
    }
}

fn history_file() -> Option<String> {
    std::env::var("HOME")
        .ok()
        .map(|h| format!("{}/.docfinder_history", h))
}

fn print_help(command: Option<&str>) {
    if let Some(cmd) = command {
        if let Err(e) = build_repl_cmd().try_get_matches_from(vec![cmd, "--help"]) {
            println!("{}", e);
        }
    } else {
        println!("Available commands:");
        println!("  add FILE...       Index files by file name");
        println!("  noise FILE        Add noise words, one per line");
        println!("  find TERM...      Rank documents containing any term");
        println!("  complete PREFIX   List indexed words with a prefix");
        println!("  show NAME         Print a document");
        println!("  docs              List document names");
        println!("  clear             Drop everything");
        println!();
        println!("Meta-commands:");
        println!("  help [command]    Show help");
        println!("  quit / exit       Exit REPL");
        println!();
        println!("TAB completes command names and indexed words.");
    }
}

// =========================================================================
// TAB Completion
// =========================================================================

struct FinderHelper {
    finder: Arc<DocFinder>,
}

impl FinderHelper {
    fn new(finder: Arc<DocFinder>) -> Self {
        Self { finder }
    }

    /// Candidates for the text before the cursor, with their start offset
    fn candidates(&self, line_to_pos: &str) -> (usize, Vec<String>) {
        let end = line_to_pos.len();
        let parts: Vec<&str> = line_to_pos.split_whitespace().collect();
        let trailing_space = line_to_pos.ends_with(char::is_whitespace);

        if parts.is_empty() || (parts.len() == 1 && !trailing_space) {
            let prefix = parts.first().copied().unwrap_or("");
            let names = COMMAND_NAMES
                .iter()
                .filter(|cmd| cmd.starts_with(prefix))
                .map(|cmd| cmd.to_string())
                .collect();
            return (end - prefix.len(), names);
        }

        let fragment = match completion_fragment(line_to_pos) {
            Some(fragment) => fragment,
            None => return (end, Vec::new()),
        };
        match self.finder.complete(&normalize(fragment)) {
            Ok(words) => (end - fragment.len(), words),
            Err(e) => {
                debug!(target: "docfinder::cli", error = %e, "Completion failed");
                (end, Vec::new())
            }
        }
    }
}

impl Helper for FinderHelper {}
impl Validator for FinderHelper {}
impl Highlighter for FinderHelper {}
impl Hinter for FinderHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Completer for FinderHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|w| Pair {
                display: w.clone(),
                replacement: w,
            })
            .collect();
        Ok((start, pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> FinderHelper {
        let finder = DocFinder::in_memory();
        finder.add_content("d", "cat car dog").unwrap();
        FinderHelper::new(Arc::new(finder))
    }

    #[test]
    fn test_complete_command_name() {
        let (start, words) = helper().candidates("co");
        assert_eq!(start, 0);
        assert_eq!(words, vec!["complete"]);
    }

    #[test]
    fn test_complete_indexed_word() {
        let (start, words) = helper().candidates("find dog Ca");
        assert_eq!(start, 9);
        assert_eq!(words, vec!["car", "cat"]);
    }

    #[test]
    fn test_no_completion_after_space_or_digit() {
        assert!(helper().candidates("find ").1.is_empty());
        assert!(helper().candidates("find c4").1.is_empty());
    }

    #[test]
    fn test_unknown_prefix_has_no_candidates() {
        let (_, words) = helper().candidates("find zz");
        assert!(words.is_empty());
    }
}
