//! Document indexing, ranked search and word completion
//!
//! This crate provides:
//! - Normalizer: tokenizing and normalizing raw text into indexable words
//! - NoiseWords: words excluded from indexing
//! - CompletionIndex: prefix lookup over every indexed word
//! - Snippet extraction and cross-term merging of search matches
//! - DocFinder: the caller-facing index over any `DocumentStore`
//! - FinderConfig: `docfinder.toml` configuration
//!
//! # Usage
//!
//! ```ignore
//! use docfinder_search::{DocFinder, FinderConfig};
//!
//! let finder = DocFinder::open(&FinderConfig::disk("data"))?;
//! finder.add_content("notes", "cat sat\ndog ran\n")?;
//! let hits = finder.find(&["cat"])?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod completion;
pub mod config;
pub mod finder;
pub mod merge;
pub mod noise;
pub mod normalizer;
pub mod snippet;

// Re-export commonly used types
pub use completion::CompletionIndex;
pub use config::{FinderConfig, StorageKind, CONFIG_FILE_NAME};
pub use finder::DocFinder;
pub use merge::{merge, sort_hits, PartialHit};
pub use noise::NoiseWords;
pub use normalizer::{completion_fragment, normalize, tokenize, words};
