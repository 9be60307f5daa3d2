//! Role classification of parsed heroes
//!
//! Role membership is static configuration data, not logic: the tables
//! below list the current roster per role and can be updated without
//! touching extraction code. Classification itself is a pure filter.

use std::collections::HashSet;

use crate::types::{HeroRecord, Role, RoleBuckets};

/// Tank roster
const TANK_HEROES: &[&str] = &[
    "D.Va",
    "Doomfist",
    "Hazard",
    "Junker Queen",
    "Mauga",
    "Orisa",
    "Ramattra",
    "Reinhardt",
    "Roadhog",
    "Sigma",
    "Winston",
    "Wrecking Ball",
    "Zarya",
];

/// Damage roster
const DAMAGE_HEROES: &[&str] = &[
    "Ashe",
    "Bastion",
    "Cassidy",
    "Echo",
    "Freja",
    "Genji",
    "Hanzo",
    "Junkrat",
    "Mei",
    "Pharah",
    "Reaper",
    "Sojourn",
    "Soldier: 76",
    "Sombra",
    "Symmetra",
    "Torbjörn",
    "Tracer",
    "Venture",
    "Widowmaker",
];

/// Support roster
const SUPPORT_HEROES: &[&str] = &[
    "Ana",
    "Baptiste",
    "Brigitte",
    "Illari",
    "Juno",
    "Kiriko",
    "Lifeweaver",
    "Lúcio",
    "Mercy",
    "Moira",
    "Wuyang",
    "Zenyatta",
];

/// Name-membership tables for the three fixed roles
#[derive(Debug, Clone)]
pub struct RoleTables {
    tank: HashSet<String>,
    damage: HashSet<String>,
    support: HashSet<String>,
}

impl RoleTables {
    /// Tables covering the current hero roster
    pub fn builtin() -> Self {
        Self::new(
            TANK_HEROES.iter().copied(),
            DAMAGE_HEROES.iter().copied(),
            SUPPORT_HEROES.iter().copied(),
        )
    }

    /// Build tables from arbitrary name sets
    pub fn new<'a>(
        tank: impl IntoIterator<Item = &'a str>,
        damage: impl IntoIterator<Item = &'a str>,
        support: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            tank: tank.into_iter().map(str::to_string).collect(),
            damage: damage.into_iter().map(str::to_string).collect(),
            support: support.into_iter().map(str::to_string).collect(),
        }
    }

    /// True when `name` is a member of `role`'s table
    pub fn contains(&self, role: Role, name: &str) -> bool {
        match role {
            Role::Tank => self.tank.contains(name),
            Role::Damage => self.damage.contains(name),
            Role::Support => self.support.contains(name),
        }
    }
}

impl Default for RoleTables {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Partition heroes into role buckets by exact name membership.
///
/// Pure function: relative input order is preserved within each bucket;
/// a hero matching no table appears in no bucket (not an error); a name
/// present in two tables lands in both.
pub fn classify(heroes: &[HeroRecord], tables: &RoleTables) -> RoleBuckets {
    let filter = |role: Role| {
        heroes
            .iter()
            .filter(|hero| tables.contains(role, &hero.name))
            .cloned()
            .collect::<Vec<_>>()
    };

    RoleBuckets {
        tank: filter(Role::Tank),
        damage: filter(Role::Damage),
        support: filter(Role::Support),
    }
}
