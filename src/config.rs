use serde::{Deserialize, Serialize};
use std::fs;

/// Share of the workflow that must be downstream of a node for a `high` impact rating.
pub const DEFAULT_HIGH_IMPACT_RATIO: f64 = 0.7;
/// Share of the workflow that must be downstream of a node for a `medium` impact rating.
pub const DEFAULT_MEDIUM_IMPACT_RATIO: f64 = 0.3;
/// Share of the workflow that must be downstream of a node for it to sit on the critical path.
pub const DEFAULT_CRITICAL_PATH_RATIO: f64 = 0.5;

/// Ratios (affected nodes / total nodes) used to classify an impact set.
/// All comparisons are strict: a ratio must exceed the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImpactThresholds {
    pub high: f64,
    pub medium: f64,
    pub critical_path: f64,
}

impl Default for ImpactThresholds {
    fn default() -> Self {
        Self {
            high: DEFAULT_HIGH_IMPACT_RATIO,
            medium: DEFAULT_MEDIUM_IMPACT_RATIO,
            critical_path: DEFAULT_CRITICAL_PATH_RATIO,
        }
    }
}

/// Tunables for an `Engine`. Every field has a default, so a partial JSON document is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    pub impact: ImpactThresholds,
    /// Warn about connections that reference a node id missing from the node list.
    /// When disabled those connections are dropped silently.
    pub report_dangling_connections: bool,
    /// Warn about node ids that occur more than once.
    pub report_duplicate_nodes: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            impact: ImpactThresholds::default(),
            report_dangling_connections: true,
            report_duplicate_nodes: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}
