//! DocFinder: indexing, ranked search and completion over a DocumentStore
//!
//! The finder owns the process-side caches (noise words, completion
//! index) and delegates persistence to a [`DocumentStore`]. Both caches
//! are loaded from the store lazily, once, on first use; later mutations
//! update store and cache together.
//!
//! # Usage
//!
//! ```
//! use docfinder_search::DocFinder;
//!
//! let finder = DocFinder::in_memory();
//! finder.add_noise_words("the\na\n")?;
//! finder.add_content("pets", "the cat sat\na dog ran\n")?;
//!
//! let hits = finder.find(&["dog", "cat"])?;
//! assert_eq!(hits[0].lines, "the cat sat\na dog ran\n");
//! assert_eq!(finder.complete("ca")?, vec!["cat"]);
//! # Ok::<(), docfinder_core::Error>(())
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use docfinder_core::{DocumentStore, Error, Posting, Result, SearchHit};
use docfinder_storage::{DiskStore, MemoryStore};

use crate::completion::CompletionIndex;
use crate::config::{FinderConfig, StorageKind};
use crate::merge::{self, PartialHit};
use crate::noise::{self, NoiseWords};
use crate::normalizer;
use crate::snippet;

/// Run `f` against a lazily loaded cache value
fn read_lazy<T, R>(
    cell: &RwLock<Option<T>>,
    load: impl FnOnce() -> Result<T>,
    f: impl FnOnce(&T) -> R,
) -> Result<R> {
    if let Some(value) = cell.read().as_ref() {
        return Ok(f(value));
    }

    let mut guard = cell.write();
    // Another thread may have loaded it between the two locks
    let value = match guard.take() {
        Some(value) => value,
        None => load()?,
    };
    let value: &T = guard.insert(value);
    Ok(f(value))
}

/// Document index and search engine
///
/// Independent finders never share state; each owns its caches and its
/// store handle.
pub struct DocFinder {
    store: Arc<dyn DocumentStore>,
    noise: RwLock<Option<NoiseWords>>,
    completions: RwLock<Option<CompletionIndex>>,
}

impl DocFinder {
    /// Create a finder over an existing store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        DocFinder {
            store,
            noise: RwLock::new(None),
            completions: RwLock::new(None),
        }
    }

    /// Create a finder over a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Open a finder as described by `config`.
    ///
    /// Builds the configured store and, if a noise-word file is given,
    /// adds its words before returning.
    ///
    /// # Errors
    ///
    /// Returns `BadInput` for an invalid config or unreadable noise file,
    /// and propagates store open failures.
    pub fn open(config: &FinderConfig) -> Result<Self> {
        config.validate()?;

        let store: Arc<dyn DocumentStore> = match (config.storage, &config.data_dir) {
            (StorageKind::Disk, Some(dir)) => Arc::new(DiskStore::open(dir, config.sync)?),
            _ => Arc::new(MemoryStore::new()),
        };
        let finder = Self::new(store);

        if let Some(path) = &config.noise_words {
            let text = fs::read_to_string(path).map_err(|e| {
                Error::bad_input(format!(
                    "Failed to read noise words '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            finder.add_noise_words(&text)?;
        }

        info!(
            target: "docfinder::index",
            storage = ?config.storage,
            "Opened finder"
        );
        Ok(finder)
    }

    /// The backing store
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    fn with_noise<R>(&self, f: impl FnOnce(&NoiseWords) -> R) -> Result<R> {
        read_lazy(
            &self.noise,
            || Ok(NoiseWords::from(self.store.noise_words()?)),
            f,
        )
    }

    fn with_completions<R>(&self, f: impl FnOnce(&CompletionIndex) -> R) -> Result<R> {
        read_lazy(
            &self.completions,
            || Ok(CompletionIndex::from(self.store.list_indexed_words()?)),
            f,
        )
    }

    // ========================================================================
    // Noise words
    // ========================================================================

    /// Add every line of `text` as a noise word.
    ///
    /// Lines are taken verbatim. Adding the same text again changes
    /// nothing.
    pub fn add_noise_words(&self, text: &str) -> Result<()> {
        let words = noise::parse_lines(text);
        self.store.add_noise_words(&words)?;
        if let Some(cached) = self.noise.write().as_mut() {
            cached.extend(words.iter().cloned());
        }
        debug!(target: "docfinder::index", count = words.len(), "Added noise words");
        Ok(())
    }

    /// Normalized, non-noise words of `content` in document order
    pub fn words(&self, content: &str) -> Result<Vec<String>> {
        self.with_noise(|noise| {
            normalizer::words(content, noise)
                .into_iter()
                .map(|(word, _)| word)
                .collect()
        })
    }

    // ========================================================================
    // Indexing
    // ========================================================================

    /// Index document `name` with `content`.
    ///
    /// Re-adding a name replaces its content and postings. Each posting
    /// keeps the offset of the word's first occurrence; later occurrences
    /// only raise its count.
    pub fn add_content(&self, name: &str, content: &str) -> Result<()> {
        let tokens = self.with_noise(|noise| normalizer::words(content, noise))?;

        let mut postings: BTreeMap<String, Posting> = BTreeMap::new();
        for (word, offset) in tokens {
            postings
                .entry(word)
                .and_modify(Posting::bump)
                .or_insert_with(|| Posting::first(offset));
        }

        self.store.put_document(name, content)?;
        self.store.remove_postings(name)?;
        for (word, posting) in &postings {
            self.store.put_posting(name, word, *posting)?;
        }

        let words: Vec<String> = postings.into_keys().collect();
        self.store.add_indexed_words(&words)?;
        if let Some(cached) = self.completions.write().as_mut() {
            cached.extend(words.iter().cloned());
        }

        debug!(
            target: "docfinder::index",
            name = %name,
            words = words.len(),
            bytes = content.len(),
            "Indexed document"
        );
        Ok(())
    }

    /// Raw content of document `name`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no document of that name was added.
    pub fn doc_content(&self, name: &str) -> Result<String> {
        self.store
            .get_document(name)?
            .ok_or_else(|| Error::not_found(name))
    }

    /// Names of all indexed documents in ascending order
    pub fn documents(&self) -> Result<Vec<String>> {
        self.store.list_document_names()
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Ranked documents matching any of `terms`.
    ///
    /// Terms are expected to be normalized already. Each hit scores the
    /// summed counts of its matched terms; its lines are the lines of each
    /// term's first occurrence in document order. Hits are ordered by
    /// descending score, then name. Unknown terms match nothing.
    pub fn find<S: AsRef<str>>(&self, terms: &[S]) -> Result<Vec<SearchHit>> {
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut partials = Vec::new();
        for name in self.store.list_document_names()? {
            let mut content: Option<String> = None;

            for term in terms {
                let term = term.as_ref();
                let posting = match self.store.get_posting(&name, term)? {
                    Some(posting) => posting,
                    None => continue,
                };

                if content.is_none() {
                    content = Some(self.doc_content(&name)?);
                }
                let text = content.as_deref().unwrap_or_default();
                let line = snippet::line_at(text, posting.offset).ok_or_else(|| {
                    Error::Corruption(format!(
                        "offset {} of '{}' outside doc {}",
                        posting.offset, term, name
                    ))
                })?;

                partials.push(PartialHit::new(
                    name.clone(),
                    u64::from(posting.count),
                    line,
                    posting.offset,
                ));
            }
        }

        let matched = partials.len();
        let hits = merge::merge(partials);
        debug!(
            target: "docfinder::search",
            terms = terms.len(),
            matched,
            hits = hits.len(),
            "Search completed"
        );
        Ok(hits)
    }

    /// Normalize free query text and search for its words
    pub fn find_query(&self, query: &str) -> Result<Vec<SearchHit>> {
        let terms = self.words(query)?;
        self.find(terms.as_slice())
    }

    // ========================================================================
    // Completion
    // ========================================================================

    /// Indexed words starting with `prefix`, ascending.
    ///
    /// The prefix is used as given. Callers deciding whether text is
    /// completable at all should use
    /// [`completion_fragment`](crate::normalizer::completion_fragment).
    pub fn complete(&self, prefix: &str) -> Result<Vec<String>> {
        self.with_completions(|index| index.complete(prefix))
    }

    // ========================================================================
    // Maintenance
    // ========================================================================

    /// Drop every document, posting, indexed word and noise word
    pub fn clear(&self) -> Result<()> {
        self.store.clear()?;
        *self.noise.write() = None;
        *self.completions.write() = None;
        info!(target: "docfinder::index", "Cleared finder");
        Ok(())
    }
}

impl std::fmt::Debug for DocFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocFinder")
            .field("noise_loaded", &self.noise.read().is_some())
            .field("completions_loaded", &self.completions.read().is_some())
            .finish()
    }
}
