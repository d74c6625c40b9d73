//! JSON venue configuration.
//!
//! # Format
//!
//! Keys are camelCase.  Locations are keyed by their unique name; everything
//! except `locations` is optional.
//!
//! ```json
//! {
//!   "sim":       { "seed": 7, "totalTicks": 200 },
//!   "locations": {
//!     "lobby":   { "floor": 1, "connections": ["hall"] },
//!     "hall":    { "floor": 1, "connections": ["lobby", "office"] },
//!     "office":  { "floor": 1, "isPrivateRoom": true, "owner": "alice",
//!                  "connections": ["hall"] }
//!   },
//!   "agents": [
//!     { "name": "alice", "home": "office", "diversionEligible": true },
//!     { "name": "bob",   "home": "lobby" }
//!   ],
//!   "scheduler": {
//!     "tiers": [ { "weight": 1, "share": 1.0 }, { "weight": 3, "share": 0.5 } ],
//!     "inclusionProbability": 0.7
//!   },
//!   "diversion": { "intervalTicks": 6, "probability": 0.4, "destination": "lobby" }
//! }
//! ```
//!
//! Location ids are assigned in ascending name order, agent ids in list
//! order.  Owners and the diversion destination are given by name and
//! resolved by [`SimBuilder::from_config`][crate::SimBuilder::from_config].

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use vn_core::SimConfig;
use vn_schedule::{SelectionTier, SelectorConfig};

use crate::SimResult;

// ── DTOs ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueConfig {
    #[serde(default)]
    pub sim: RunSection,

    pub locations: BTreeMap<String, LocationConfig>,

    #[serde(default)]
    pub agents: Vec<AgentConfig>,

    #[serde(default)]
    pub scheduler: SchedulerSection,

    #[serde(default)]
    pub diversion: Option<DiversionSection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSection {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_total_ticks")]
    pub total_ticks: u64,
}

impl Default for RunSection {
    fn default() -> Self {
        Self { seed: default_seed(), total_ticks: default_total_ticks() }
    }
}

impl From<&RunSection> for SimConfig {
    fn from(s: &RunSection) -> Self {
        SimConfig { seed: s.seed, total_ticks: s.total_ticks }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationConfig {
    #[serde(default = "default_floor")]
    pub floor: u32,

    #[serde(default)]
    pub staff_only: bool,

    #[serde(default)]
    pub is_private_room: bool,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub connections: Vec<String>,

    #[serde(default)]
    pub locked: bool,

    /// Agent name.  Only valid on private rooms.
    #[serde(default)]
    pub owner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub name: String,

    /// Location name; the agent starts here.
    pub home: String,

    #[serde(default = "default_true")]
    pub active: bool,

    #[serde(default)]
    pub diversion_eligible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierConfig {
    pub weight: u32,
    pub share:  f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulerSection {
    #[serde(default = "default_tiers")]
    pub tiers: Vec<TierConfig>,

    #[serde(default = "default_inclusion_probability")]
    pub inclusion_probability: f64,
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self { tiers: default_tiers(), inclusion_probability: default_inclusion_probability() }
    }
}

impl From<&SchedulerSection> for SelectorConfig {
    fn from(s: &SchedulerSection) -> Self {
        SelectorConfig {
            tiers: s.tiers.iter().map(|t| SelectionTier::new(t.weight, t.share)).collect(),
            inclusion_probability: s.inclusion_probability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversionSection {
    pub interval_ticks: u64,
    pub probability:    f64,

    /// Location name.
    pub destination: String,
}

// ── Defaults ──────────────────────────────────────────────────────────────────

fn default_seed() -> u64 {
    SimConfig::default().seed
}

fn default_total_ticks() -> u64 {
    SimConfig::default().total_ticks
}

fn default_floor() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_tiers() -> Vec<TierConfig> {
    SelectorConfig::default()
        .tiers
        .into_iter()
        .map(|t| TierConfig { weight: t.weight, share: t.share })
        .collect()
}

fn default_inclusion_probability() -> f64 {
    SelectorConfig::default().inclusion_probability
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`VenueConfig`] from a JSON file.
pub fn load_config_json(path: &Path) -> SimResult<VenueConfig> {
    let file = File::open(path)?;
    load_config_reader(BufReader::new(file))
}

/// Like [`load_config_json`] but accepts any `Read` source.
pub fn load_config_reader<R: Read>(reader: R) -> SimResult<VenueConfig> {
    Ok(serde_json::from_reader(reader)?)
}
