//! Hero Rates Scraper Core Library
//!
//! This crate scrapes per-hero pick rate and win rate percentages from
//! the public Overwatch statistics page and assembles them into a JSON
//! snapshot partitioned by role.
//!
//! # Features
//! - Single-attempt HTTP fetch with pinned headers and a fixed timeout
//! - Text extraction from the flattened page with two decomposition
//!   strategies (regex token scan, positional stride)
//! - Per-run column-order detection for the pick/win rate ambiguity
//! - Static role classification and stable snapshot serialization

pub mod client;
pub mod error;
pub mod parser;
pub mod roles;
pub mod scraper;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, PageQuery, RatesClient, RequestPacer};
pub use error::{RatesError, Result};
pub use parser::{extract, extract_from_text, ColumnOrder, Extraction, ExtractionTrace, Strategy};
pub use roles::{classify, RoleTables};
pub use scraper::RatesScraper;
pub use types::{HeroRecord, RatesSnapshot, Role, RoleBuckets, SnapshotMeta};
