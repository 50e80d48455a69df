//! Log record format for the disk store.
//!
//! The log is a flat sequence of self-delimiting records.
//!
//! # Record Layout
//!
//! ```text
//! ┌─────────────────┬─────────────────────────┬──────────┐
//! │ Length (4 bytes)│ Payload (variable)      │ CRC32 (4)│
//! └─────────────────┴─────────────────────────┴──────────┘
//! ```
//!
//! Length and CRC are little-endian. The payload is a MessagePack-encoded
//! [`LogRecord`]; the CRC covers the payload only.

use std::io::Write;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};
use crc32fast::Hasher;
use serde::{Deserialize, Serialize};

use docfinder_core::{Error, Posting, Result};

/// Size of the length prefix in bytes
pub const LENGTH_SIZE: usize = 4;

/// Size of the trailing checksum in bytes
pub const CRC_SIZE: usize = 4;

/// Upper bound on a single payload; larger lengths are treated as corruption
pub const MAX_PAYLOAD_SIZE: usize = 256 * 1024 * 1024;

/// One logged store mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogRecord {
    /// Upsert document content
    PutDocument {
        /// Document name
        name: String,
        /// Raw content
        content: String,
    },
    /// Upsert one posting
    PutPosting {
        /// Document name
        name: String,
        /// Normalized word
        word: String,
        /// Occurrence record
        posting: Posting,
    },
    /// Drop all postings of a document
    RemovePostings {
        /// Document name
        name: String,
    },
    /// Extend the indexed-word set
    AddIndexedWords {
        /// Words to add
        words: Vec<String>,
    },
    /// Extend the noise-word set
    AddNoiseWords {
        /// Words to add
        words: Vec<String>,
    },
}

impl LogRecord {
    /// Encode this record with its length prefix and checksum
    ///
    /// # Errors
    ///
    /// Returns `BadInput` if the payload exceeds [`MAX_PAYLOAD_SIZE`];
    /// replay would reject such a record and drop everything after it.
    pub fn encode(&self) -> Result<Vec<u8>> {
        let payload = rmp_serde::to_vec_named(self)?;
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(Error::bad_input(format!(
                "record payload of {} bytes exceeds limit of {} bytes",
                payload.len(),
                MAX_PAYLOAD_SIZE
            )));
        }
        let mut buf = Vec::with_capacity(LENGTH_SIZE + payload.len() + CRC_SIZE);
        buf.write_u32::<LittleEndian>(payload.len() as u32)?;
        buf.write_all(&payload)?;
        buf.write_u32::<LittleEndian>(checksum(&payload))?;
        Ok(buf)
    }
}

fn checksum(payload: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(payload);
    hasher.finalize()
}

/// Outcome of scanning a log buffer
#[derive(Debug)]
pub struct LogScan {
    /// Records decoded in log order
    pub records: Vec<LogRecord>,
    /// Byte length of the valid prefix
    pub valid_len: usize,
    /// Why scanning stopped before the end of the buffer, if it did
    pub damage: Option<Error>,
}

/// Decode every intact record from the start of `buf`.
///
/// Scanning stops at the first record that is truncated, fails its
/// checksum, or does not decode. Everything before that point is returned
/// together with its length so the caller can cut the tail off.
pub fn scan(buf: &[u8]) -> LogScan {
    let mut records = Vec::new();
    let mut pos = 0;

    let damage = loop {
        let rest = &buf[pos..];
        if rest.is_empty() {
            break None;
        }
        if rest.len() < LENGTH_SIZE {
            break Some(Error::Corruption(format!(
                "truncated length prefix at offset {}",
                pos
            )));
        }

        let len = LittleEndian::read_u32(&rest[..LENGTH_SIZE]) as usize;
        if len > MAX_PAYLOAD_SIZE {
            break Some(Error::Corruption(format!(
                "record length {} at offset {} exceeds limit",
                len, pos
            )));
        }
        let total = LENGTH_SIZE + len + CRC_SIZE;
        if rest.len() < total {
            break Some(Error::Corruption(format!(
                "truncated record at offset {}: need {} bytes, have {}",
                pos,
                total,
                rest.len()
            )));
        }

        let payload = &rest[LENGTH_SIZE..LENGTH_SIZE + len];
        let stored_crc = LittleEndian::read_u32(&rest[LENGTH_SIZE + len..total]);
        if stored_crc != checksum(payload) {
            break Some(Error::Corruption(format!(
                "checksum mismatch at offset {}",
                pos
            )));
        }

        match rmp_serde::from_slice::<LogRecord>(payload) {
            Ok(record) => records.push(record),
            Err(e) => break Some(e.into()),
        }
        pos += total;
    };

    LogScan {
        records,
        valid_len: pos,
        damage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<LogRecord> {
        vec![
            LogRecord::PutDocument {
                name: "doc".into(),
                content: "cat sat\n".into(),
            },
            LogRecord::PutPosting {
                name: "doc".into(),
                word: "cat".into(),
                posting: Posting { count: 2, offset: 0 },
            },
            LogRecord::AddNoiseWords {
                words: vec!["the".into(), "".into()],
            },
        ]
    }

    fn encode_all(records: &[LogRecord]) -> Vec<u8> {
        records
            .iter()
            .flat_map(|r| r.encode().unwrap())
            .collect()
    }

    #[test]
    fn test_scan_reads_all_records() {
        let records = sample();
        let buf = encode_all(&records);

        let scan = scan(&buf);
        assert_eq!(scan.records, records);
        assert_eq!(scan.valid_len, buf.len());
        assert!(scan.damage.is_none());
    }

    #[test]
    fn test_scan_empty() {
        let scan = scan(&[]);
        assert!(scan.records.is_empty());
        assert_eq!(scan.valid_len, 0);
        assert!(scan.damage.is_none());
    }

    #[test]
    fn test_scan_stops_at_torn_tail() {
        let records = sample();
        let mut buf = encode_all(&records);
        let intact = buf.len();
        let extra = LogRecord::RemovePostings { name: "doc".into() }.encode().unwrap();
        buf.extend_from_slice(&extra[..extra.len() - 3]);

        let scan = scan(&buf);
        assert_eq!(scan.records.len(), 3);
        assert_eq!(scan.valid_len, intact);
        assert!(matches!(scan.damage, Some(Error::Corruption(_))));
    }

    #[test]
    fn test_scan_detects_checksum_mismatch() {
        let records = sample();
        let mut buf = encode_all(&records[..1]);
        let first_len = buf.len();
        buf.extend(encode_all(&records[1..2]));
        // Flip a payload byte of the second record
        buf[first_len + LENGTH_SIZE] ^= 0xFF;

        let scan = scan(&buf);
        assert_eq!(scan.records.len(), 1);
        assert_eq!(scan.valid_len, first_len);
        assert!(scan.damage.is_some());
    }

    #[test]
    fn test_scan_rejects_oversized_length() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&u32::MAX.to_le_bytes());
        buf.extend_from_slice(&[0u8; 8]);

        let scan = scan(&buf);
        assert!(scan.records.is_empty());
        assert_eq!(scan.valid_len, 0);
        assert!(scan.damage.is_some());
    }
}
