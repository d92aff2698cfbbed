pub mod rules_pipeline;
pub mod tracker_pipeline;
