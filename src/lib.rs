pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::storage::LocalStorage;
pub use crate::app::pipelines::{rules_pipeline::RulesPipeline, tracker_pipeline::TrackerPipeline};
pub use crate::config::{ConverterConfig, RulesConfig};
pub use crate::core::{etl::EtlEngine, LoadSummary, TrackerDocument};
pub use crate::utils::error::{EtlError, Result};
