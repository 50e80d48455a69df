//! Finder Comprehensive Test Suite
//!
//! End-to-end guarantees of the public `docfinder` API.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Normalization** (tokenizing, stemming placeholder, noise)
//! - **Tier 2: Indexing** (first-offset freeze, idempotent re-add)
//! - **Tier 3: Search** (score additivity, snippet merge, ordering)
//! - **Tier 4: Completion** (prefix lookup, incremental growth)
//! - **Tier 5: Persistence** (disk-backed finder survives reopen)
//!
//! Tiers 1-4 run every scenario against both the memory and the disk
//! backing.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test finder_comprehensive
//!
//! # Run specific tier
//! cargo test --test finder_comprehensive tier3
//! ```

mod test_utils;
mod tier1_normalization;
mod tier2_indexing;
mod tier3_search;
mod tier4_completion;
mod tier5_persistence;
