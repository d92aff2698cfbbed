use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The `{"trackers": [...]}` document written by the converter and read by
/// the rules generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerDocument {
    pub trackers: Vec<String>,
}

/// Deduplicating accumulator for extracted domains. Equality is exact and
/// case-sensitive; iteration order is ascending byte order.
#[derive(Debug, Clone, Default)]
pub struct TrackerSet {
    domains: BTreeSet<String>,
}

impl TrackerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the domain was not already present.
    pub fn insert(&mut self, domain: &str) -> bool {
        if self.domains.contains(domain) {
            return false;
        }
        self.domains.insert(domain.to_string())
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn into_document(self) -> TrackerDocument {
        TrackerDocument {
            trackers: self.domains.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleAction {
    #[serde(rename = "type")]
    pub action_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleCondition {
    pub url_filter: String,
    pub resource_types: Vec<String>,
}

/// A static `declarativeNetRequest` blocking rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockRule {
    pub id: usize,
    pub priority: u32,
    pub action: RuleAction,
    pub condition: RuleCondition,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleStats {
    pub total_entries: usize,
    pub unique_entries: usize,
    pub priority_included: usize,
    pub rules_generated: usize,
}

impl RuleStats {
    /// Percentage of input entries that became rules. Zero for an empty input.
    pub fn coverage_percent(&self) -> f64 {
        if self.total_entries == 0 {
            return 0.0;
        }
        self.rules_generated as f64 / self.total_entries as f64 * 100.0
    }

    pub fn remaining(&self) -> usize {
        self.total_entries.saturating_sub(self.rules_generated)
    }
}

#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<BlockRule>,
    pub blocked: Vec<String>,
    pub stats: RuleStats,
}

/// What a pipeline's load step reports back to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub output_path: String,
    pub count: usize,
}
