//! docfinder - full-text document indexing and retrieval
//!
//! docfinder indexes named text documents into per-document inverted
//! indexes of normalized words, answers multi-term ranked searches with
//! line snippets, and completes word prefixes.
//!
//! # Quick Start
//!
//! ```
//! use docfinder::DocFinder;
//!
//! let finder = DocFinder::in_memory();
//! finder.add_noise_words("the")?;
//! finder.add_content("pets", "the cat sat\nthe dog ran\n")?;
//!
//! let hits = finder.find(&["dog"])?;
//! assert_eq!(hits[0].to_string(), "pets: 1\nthe dog ran\n");
//! # Ok::<(), docfinder::Error>(())
//! ```
//!
//! # Architecture
//!
//! [`DocFinder`] runs over any [`DocumentStore`]: [`MemoryStore`] keeps
//! everything in process, [`DiskStore`] rebuilds the same state from an
//! append-only log. [`FinderConfig`] chooses between them.

pub use docfinder_core::{DocumentStore, Error, Posting, Result, SearchHit};
pub use docfinder_search::{
    completion_fragment, normalize, tokenize, CompletionIndex, DocFinder, FinderConfig,
    NoiseWords, StorageKind, CONFIG_FILE_NAME,
};
pub use docfinder_storage::{DiskStore, MemoryStore, SyncMode};
