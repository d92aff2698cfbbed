pub mod etl;

pub use crate::domain::model::{LoadSummary, RuleSet, TrackerDocument, TrackerSet};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
