//! Data types for the hero rates scraper
//!
//! This module contains the core data structures used throughout the
//! library. Wire names are camelCase to keep the output document stable
//! for downstream consumers.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fixed hero role on the statistics page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Tank,
    Damage,
    Support,
}

impl Role {
    /// All roles in page order
    pub const ALL: [Role; 3] = [Role::Tank, Role::Damage, Role::Support];
}

/// One parsed hero entry from the statistics page.
///
/// The percentage values are kept as the literal source tokens
/// (e.g. `"46.9%"`), not parsed numbers, to preserve the exact page
/// formatting in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroRecord {
    /// Hero display name, trimmed
    pub name: String,
    /// Pick rate percentage token (e.g. "46.9%")
    #[serde(rename = "pickRate")]
    pub pick_rate: String,
    /// Win rate percentage token (e.g. "52.3%")
    #[serde(rename = "winRate")]
    pub win_rate: String,
}

/// Heroes partitioned by role.
///
/// A hero whose name matches no role table appears in no bucket;
/// relative input order is preserved within each bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBuckets {
    #[serde(rename = "Tank")]
    pub tank: Vec<HeroRecord>,
    #[serde(rename = "Damage")]
    pub damage: Vec<HeroRecord>,
    #[serde(rename = "Support")]
    pub support: Vec<HeroRecord>,
}

impl RoleBuckets {
    /// Total number of records across all three buckets
    pub fn total(&self) -> usize {
        self.tank.len() + self.damage.len() + self.support.len()
    }

    /// True if every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Borrow the bucket for a role
    pub fn bucket(&self, role: Role) -> &[HeroRecord] {
        match role {
            Role::Tank => &self.tank,
            Role::Damage => &self.damage,
            Role::Support => &self.support,
        }
    }
}

/// Provenance metadata attached to every snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMeta {
    /// Human-readable source label
    pub source: String,
    /// URL the data was fetched from
    pub source_url: String,
    pub region: String,
    pub tier: String,
    pub game_mode: String,
    pub platform: String,
    pub disclaimer: String,
}

impl Default for SnapshotMeta {
    fn default() -> Self {
        Self {
            source: "Blizzard Entertainment official statistics".to_string(),
            source_url: crate::client::PageQuery::default().url(),
            region: "Europe".to_string(),
            tier: "All".to_string(),
            game_mode: "Competitive".to_string(),
            platform: "PC".to_string(),
            disclaimer: "Hero statistics are scraped from a public page and may lag or \
                         misrepresent the live values. Not affiliated with Blizzard \
                         Entertainment."
                .to_string(),
        }
    }
}

/// The top-level output document for one scraper run.
///
/// Field order is declaration order and must stay stable across runs;
/// downstream consumers rely on it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesSnapshot {
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    pub source: String,
    #[serde(rename = "sourceUrl")]
    pub source_url: String,
    pub region: String,
    pub tier: String,
    #[serde(rename = "gameMode")]
    pub game_mode: String,
    pub platform: String,
    pub disclaimer: String,
    /// False when the pick/win column order could not be re-derived from
    /// the page header and the documented default order was used instead
    #[serde(rename = "columnOrderVerified")]
    pub column_order_verified: bool,
    pub roles: RoleBuckets,
}

impl RatesSnapshot {
    /// Assemble a snapshot from classified buckets and run metadata,
    /// stamping the generation time.
    pub fn assemble(buckets: RoleBuckets, meta: SnapshotMeta, column_order_verified: bool) -> Self {
        Self {
            last_updated: Utc::now().to_rfc3339(),
            source: meta.source,
            source_url: meta.source_url,
            region: meta.region,
            tier: meta.tier,
            game_mode: meta.game_mode,
            platform: meta.platform,
            disclaimer: meta.disclaimer,
            column_order_verified,
            roles: buckets,
        }
    }

    /// Total number of records across all role buckets
    pub fn total(&self) -> usize {
        self.roles.total()
    }
}
