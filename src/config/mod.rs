use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct_paths, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};

pub const FILTER_LIST_FILE: &str = "easyprivacy.txt";
pub const TRACKERS_FILE: &str = "trackers.json";
pub const RULES_FILE: &str = "rules.json";
pub const BLOCKED_LIST_FILE: &str = "blocked-trackers.txt";
pub const DEFAULT_MAX_RULES: usize = 30_000;

/// Settings for the filter-list to `trackers.json` conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub input_path: String,
    pub output_path: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input_path: FILTER_LIST_FILE.to_string(),
            output_path: TRACKERS_FILE.to_string(),
        }
    }
}

impl ConfigProvider for ConverterConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for ConverterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_distinct_paths(&[
            ("input_path", self.input_path.as_str()),
            ("output_path", self.output_path.as_str()),
        ])
    }
}

/// Settings for turning `trackers.json` into blocking rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub input_path: String,
    pub output_path: String,
    pub blocked_list_path: String,
    pub max_rules: usize,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            input_path: TRACKERS_FILE.to_string(),
            output_path: RULES_FILE.to_string(),
            blocked_list_path: BLOCKED_LIST_FILE.to_string(),
            max_rules: DEFAULT_MAX_RULES,
        }
    }
}

impl ConfigProvider for RulesConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }
}

impl Validate for RulesConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_path("blocked_list_path", &self.blocked_list_path)?;
        validate_positive_number("max_rules", self.max_rules, 1)?;
        validate_distinct_paths(&[
            ("input_path", self.input_path.as_str()),
            ("output_path", self.output_path.as_str()),
            ("blocked_list_path", self.blocked_list_path.as_str()),
        ])
    }
}
