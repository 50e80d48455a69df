//! Storage layer for docfinder
//!
//! This crate implements the `DocumentStore` backends:
//! - MemoryStore: hash maps behind a RwLock, nothing persisted
//! - DiskStore: the same state rebuilt from an append-only, checksummed
//!   log on open
//! - SyncMode: fsync policy for DiskStore appends

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod disk;
pub mod memory;
pub mod record;
pub mod sync_mode;

pub use disk::{DiskStore, LOG_FILE_NAME};
pub use memory::MemoryStore;
pub use record::LogRecord;
pub use sync_mode::SyncMode;
