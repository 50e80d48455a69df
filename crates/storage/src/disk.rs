//! DiskStore: persistent storage backend backed by an append-only log
//!
//! Every mutation is encoded as a [`LogRecord`] and appended to
//! `docfinder.log` in the store directory before it is applied to the
//! in-memory [`MemoryState`]. Opening a store replays the log.
//!
//! # Recovery
//!
//! Replay stops at the first damaged record (torn write, checksum
//! mismatch, undecodable payload). The damaged tail is truncated so later
//! appends start from a clean boundary.

use std::collections::{BTreeSet, HashSet};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use docfinder_core::{DocumentStore, Error, Posting, Result};

use crate::memory::MemoryState;
use crate::record::{self, LogRecord};
use crate::sync_mode::SyncMode;

/// Log file name placed in the store directory.
pub const LOG_FILE_NAME: &str = "docfinder.log";

struct DiskInner {
    state: MemoryState,
    file: File,
    /// Set when a failed append could not be rolled back
    poisoned: bool,
}

/// The operations an append needs from the log file
trait LogFile: Write {
    fn len(&self) -> io::Result<u64>;
    fn truncate(&mut self, len: u64) -> io::Result<()>;
    fn sync(&mut self) -> io::Result<()>;
}

impl LogFile for File {
    fn len(&self) -> io::Result<u64> {
        Ok(self.metadata()?.len())
    }

    fn truncate(&mut self, len: u64) -> io::Result<()> {
        self.set_len(len)
    }

    fn sync(&mut self) -> io::Result<()> {
        self.sync_data()
    }
}

/// Outcome of a failed append
#[derive(Debug)]
enum AppendError {
    /// The log was cut back to its previous length
    RolledBack(io::Error),
    /// The log may still hold part of the record
    Torn(io::Error),
}

/// Write `bytes` at the end of `file`, cutting the file back to its
/// previous length if the write or fsync fails.
fn append_bytes<F: LogFile>(
    file: &mut F,
    bytes: &[u8],
    fsync: bool,
) -> std::result::Result<(), AppendError> {
    let len = file.len().map_err(AppendError::RolledBack)?;
    let written = file
        .write_all(bytes)
        .and_then(|()| if fsync { file.sync() } else { Ok(()) });

    match written {
        Ok(()) => Ok(()),
        Err(e) => match file.truncate(len) {
            Ok(()) => Err(AppendError::RolledBack(e)),
            Err(_) => Err(AppendError::Torn(e)),
        },
    }
}

/// Persistent storage backend
///
/// Reads are served from memory; writes append to the log under the
/// write lock, so records land in the same order they are applied.
/// Records that would not change the state are not logged.
pub struct DiskStore {
    path: PathBuf,
    sync: SyncMode,
    inner: RwLock<DiskInner>,
}

impl std::fmt::Debug for DiskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiskStore")
            .field("path", &self.path)
            .field("sync", &self.sync)
            .finish()
    }
}

impl DiskStore {
    /// Open or create a store in directory `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or log file cannot be created,
    /// read, or truncated.
    pub fn open(dir: impl AsRef<Path>, sync: SyncMode) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(LOG_FILE_NAME);

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)?;

        let mut buf = Vec::new();
        file.read_to_end(&mut buf)?;

        let scan = record::scan(&buf);
        if let Some(damage) = &scan.damage {
            warn!(
                target: "docfinder::store",
                path = ?path,
                valid_len = scan.valid_len,
                discarded = buf.len() - scan.valid_len,
                error = %damage,
                "Discarding damaged log tail"
            );
            file.set_len(scan.valid_len as u64)?;
            file.sync_all()?;
        }

        let mut state = MemoryState::default();
        for rec in &scan.records {
            state.apply(rec);
        }

        info!(
            target: "docfinder::store",
            path = ?path,
            records = scan.records.len(),
            sync = sync.description(),
            "Opened disk store"
        );

        Ok(DiskStore {
            path,
            sync,
            inner: RwLock::new(DiskInner {
                state,
                file,
                poisoned: false,
            }),
        })
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sync mode this store was opened with
    pub fn sync_mode(&self) -> SyncMode {
        self.sync
    }

    /// Force all appended records to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the fsync fails.
    pub fn flush(&self) -> Result<()> {
        self.inner.read().file.sync_data()?;
        Ok(())
    }

    fn append(&self, rec: LogRecord) -> Result<()> {
        let mut inner = self.inner.write();
        self.append_locked(&mut inner, rec)
    }

    /// Log `rec` and apply it. Nothing is applied unless the whole record
    /// reached the log.
    fn append_locked(&self, inner: &mut DiskInner, rec: LogRecord) -> Result<()> {
        if inner.poisoned {
            return Err(Error::Storage(format!(
                "log {} holds a partial record; reopen the store to recover",
                self.path.display()
            )));
        }

        let bytes = rec.encode()?;
        let fsync = self.sync.requires_immediate_fsync();
        match append_bytes(&mut inner.file, &bytes, fsync) {
            Ok(()) => {
                inner.state.apply(&rec);
                Ok(())
            }
            Err(AppendError::RolledBack(e)) => {
                warn!(
                    target: "docfinder::store",
                    path = ?self.path,
                    error = %e,
                    "Append failed, log rolled back"
                );
                Err(e.into())
            }
            Err(AppendError::Torn(e)) => {
                error!(
                    target: "docfinder::store",
                    path = ?self.path,
                    error = %e,
                    "Append failed, log not rolled back"
                );
                inner.poisoned = true;
                Err(e.into())
            }
        }
    }
}

impl DocumentStore for DiskStore {
    fn get_document(&self, name: &str) -> Result<Option<String>> {
        Ok(self.inner.read().state.get_document(name))
    }

    fn put_document(&self, name: &str, content: &str) -> Result<()> {
        if content.len() > record::MAX_PAYLOAD_SIZE {
            return Err(Error::bad_input(format!(
                "doc {} of {} bytes exceeds limit of {} bytes",
                name,
                content.len(),
                record::MAX_PAYLOAD_SIZE
            )));
        }

        let mut inner = self.inner.write();
        if inner.state.has_document(name, content) {
            return Ok(());
        }
        self.append_locked(
            &mut inner,
            LogRecord::PutDocument {
                name: name.to_string(),
                content: content.to_string(),
            },
        )
    }

    fn get_posting(&self, name: &str, word: &str) -> Result<Option<Posting>> {
        Ok(self.inner.read().state.get_posting(name, word))
    }

    fn put_posting(&self, name: &str, word: &str, posting: Posting) -> Result<()> {
        self.append(LogRecord::PutPosting {
            name: name.to_string(),
            word: word.to_string(),
            posting,
        })
    }

    fn remove_postings(&self, name: &str) -> Result<()> {
        self.append(LogRecord::RemovePostings {
            name: name.to_string(),
        })
    }

    fn list_document_names(&self) -> Result<Vec<String>> {
        Ok(self.inner.read().state.document_names())
    }

    fn list_indexed_words(&self) -> Result<BTreeSet<String>> {
        Ok(self.inner.read().state.indexed_words())
    }

    fn add_indexed_words(&self, words: &[String]) -> Result<()> {
        let mut inner = self.inner.write();
        let words = inner.state.new_indexed_words(words);
        if words.is_empty() {
            return Ok(());
        }
        self.append_locked(&mut inner, LogRecord::AddIndexedWords { words })
    }

    fn noise_words(&self) -> Result<HashSet<String>> {
        Ok(self.inner.read().state.noise_words())
    }

    fn add_noise_words(&self, words: &[String]) -> Result<()> {
        let mut inner = self.inner.write();
        let words = inner.state.new_noise_words(words);
        if words.is_empty() {
            return Ok(());
        }
        self.append_locked(&mut inner, LogRecord::AddNoiseWords { words })
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.inner.write();
        inner.file.set_len(0)?;
        inner.file.sync_all()?;
        inner.state.clear();
        inner.poisoned = false;
        debug!(target: "docfinder::store", path = ?self.path, "Cleared disk store");
        Ok(())
    }
}
