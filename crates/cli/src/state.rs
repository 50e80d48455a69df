//! Session wrapper around the finder.
//!
//! Runs `CliAction`s against a shared `DocFinder` and returns an
//! `Output` for the formatter.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use docfinder_core::{Error, Result, SearchHit};
use docfinder_search::{completion_fragment, normalize, DocFinder};
use tracing::info;

use crate::parse::CliAction;

/// Result of one action, ready to format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Ranked search hits
    Hits(Vec<SearchHit>),
    /// Completion candidates or document names
    Words(Vec<String>),
    /// Content of one document
    Content { name: String, content: String },
    /// Documents indexed by an `add`
    Indexed(Vec<String>),
    /// Action with nothing to report
    Done,
}

/// Holds the finder for the lifetime of a session.
pub struct SessionState {
    finder: Arc<DocFinder>,
}

impl SessionState {
    pub fn new(finder: DocFinder) -> Self {
        Self {
            finder: Arc::new(finder),
        }
    }

    /// Shared handle for the REPL completer
    pub fn finder(&self) -> Arc<DocFinder> {
        Arc::clone(&self.finder)
    }

    /// Execute one action.
    pub fn execute(&self, action: CliAction) -> Result<Output> {
        match action {
            CliAction::Add { paths } => {
                let mut names = Vec::with_capacity(paths.len());
                for path in &paths {
                    names.push(self.add_file(path)?);
                }
                Ok(Output::Indexed(names))
            }
            CliAction::Noise { path } => {
                let text = read_file(&path)?;
                self.finder.add_noise_words(&text)?;
                Ok(Output::Done)
            }
            CliAction::Find { terms } => {
                let hits = self.finder.find_query(&terms.join(" "))?;
                Ok(Output::Hits(hits))
            }
            CliAction::Complete { prefix } => match completion_fragment(&prefix) {
                Some(fragment) => {
                    let words = self.finder.complete(&normalize(fragment))?;
                    Ok(Output::Words(words))
                }
                None => Ok(Output::Words(Vec::new())),
            },
            CliAction::Show { name } => {
                let content = self.finder.doc_content(&name)?;
                Ok(Output::Content { name, content })
            }
            CliAction::Docs => Ok(Output::Words(self.finder.documents()?)),
            CliAction::Clear => {
                self.finder.clear()?;
                Ok(Output::Done)
            }
        }
    }

    /// Index one file under its file name.
    pub fn add_file(&self, path: &Path) -> Result<String> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::bad_input(format!("Not a file: {}", path.display())))?;
        let content = read_file(path)?;
        self.finder.add_content(&name, &content)?;
        info!(target: "docfinder::cli", name = %name, path = %path.display(), "Indexed file");
        Ok(name)
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::bad_input(format!("Failed to read '{}': {}", path.display(), e)))
}
