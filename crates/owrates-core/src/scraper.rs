//! High-level scraper API
//!
//! Combines the HTTP client with extraction, classification and snapshot
//! assembly. This is also the logging collaborator: extraction and
//! classification stay pure, and this layer renders their diagnostic
//! trace to the log.

use log::{debug, info, warn};

use crate::client::{PageQuery, RatesClient};
use crate::error::Result;
use crate::parser::{self, Extraction, Strategy};
use crate::roles::{classify, RoleTables};
use crate::types::{RatesSnapshot, SnapshotMeta};

/// One-shot scraper for the hero statistics page.
///
/// # Example
/// ```no_run
/// use owrates_core::{PageQuery, RatesScraper};
///
/// #[tokio::main]
/// async fn main() -> Result<(), owrates_core::RatesError> {
///     let scraper = RatesScraper::new()?;
///     let snapshot = scraper.scrape(&PageQuery::default()).await?;
///     println!("{} heroes classified", snapshot.total());
///     Ok(())
/// }
/// ```
pub struct RatesScraper {
    client: RatesClient,
    tables: RoleTables,
}

impl RatesScraper {
    /// Create a scraper with default configuration and the builtin role
    /// tables.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_client(RatesClient::new()?))
    }

    /// Create a scraper around a pre-configured client
    pub fn with_client(client: RatesClient) -> Self {
        Self {
            client,
            tables: RoleTables::builtin(),
        }
    }

    /// Replace the role membership tables
    pub fn with_tables(mut self, tables: RoleTables) -> Self {
        self.tables = tables;
        self
    }

    /// Run the full pipeline once with the default decomposition strategy.
    pub async fn scrape(&self, query: &PageQuery) -> Result<RatesSnapshot> {
        self.scrape_with_strategy(query, Strategy::default()).await
    }

    /// Run the full pipeline once: fetch, extract, classify, assemble.
    ///
    /// A snapshot with zero classified heroes is still `Ok`; the caller
    /// decides whether that is a run-level failure.
    pub async fn scrape_with_strategy(
        &self,
        query: &PageQuery,
        strategy: Strategy,
    ) -> Result<RatesSnapshot> {
        let url = query.url();
        info!("fetching {url}");
        let html = self.client.fetch(&url).await?;
        Ok(self.snapshot_from_html(&html, url, query, strategy))
    }

    /// Extract, classify and assemble from already-fetched page HTML.
    pub fn snapshot_from_html(
        &self,
        html: &str,
        source_url: String,
        query: &PageQuery,
        strategy: Strategy,
    ) -> RatesSnapshot {
        let extraction = parser::extract(html, strategy);
        log_extraction(&extraction);

        let buckets = classify(&extraction.heroes, &self.tables);
        info!(
            "classified {} of {} heroes (tank {}, damage {}, support {})",
            buckets.total(),
            extraction.heroes.len(),
            buckets.tank.len(),
            buckets.damage.len(),
            buckets.support.len(),
        );

        let meta = SnapshotMeta {
            source_url,
            region: query.region.clone(),
            tier: query.tier.clone(),
            platform: query.input.clone(),
            ..SnapshotMeta::default()
        };

        RatesSnapshot::assemble(buckets, meta, extraction.order_verified)
    }
}

/// Render the extraction diagnostics to the log.
fn log_extraction(extraction: &Extraction) {
    let trace = &extraction.trace;
    info!("flattened page text: {} characters", trace.text_len);

    match trace.span_len {
        Some(len) => info!("hero data span: {len} characters"),
        None => warn!("hero data boundaries not found in page text"),
    }

    info!(
        "decomposition: {} candidates, {} rejected, {} kept",
        trace.candidates,
        trace.rejected,
        extraction.heroes.len(),
    );

    if !extraction.order_verified {
        warn!(
            "column order could not be derived from the page header; \
             using default {:?} (snapshot flagged as unverified)",
            extraction.column_order,
        );
    }

    for hero in &extraction.heroes {
        debug!(
            "{}: {} pick, {} win",
            hero.name, hero.pick_rate, hero.win_rate
        );
    }
}
