use crate::core::{ConfigProvider, LoadSummary, Pipeline, Storage, TrackerDocument, TrackerSet};
use crate::domain::rules::{classify_line, LineKind};
use crate::utils::error::Result;
use crate::utils::json::to_ascii_pretty_json;

/// Filter list in, `{"trackers": [...]}` out.
pub struct TrackerPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> TrackerPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

/// Lines end at `\n`, `\r\n` or a lone `\r`; the empty piece a `\r\n` leaves
/// behind is skipped as a blank line.
pub fn collect_trackers(text: &str) -> TrackerSet {
    let mut set = TrackerSet::new();
    let mut adblock = 0usize;
    let mut hosts = 0usize;

    for line in text.split(['\n', '\r']) {
        match classify_line(line) {
            LineKind::Adblock(domain) => {
                adblock += 1;
                set.insert(domain);
            }
            LineKind::Hosts(domain) => {
                hosts += 1;
                set.insert(domain);
            }
            LineKind::Skipped | LineKind::Unrecognized => {}
        }
    }

    tracing::debug!(
        "Matched {} adblock rules and {} hosts rules, {} unique domains",
        adblock,
        hosts,
        set.len()
    );
    set
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TrackerPipeline<S, C> {
    type Extracted = String;
    type Transformed = TrackerDocument;

    async fn extract(&self) -> Result<String> {
        tracing::info!("Reading filter list from {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        let text = String::from_utf8(bytes)?;
        Ok(text)
    }

    async fn transform(&self, data: String) -> Result<TrackerDocument> {
        Ok(collect_trackers(&data).into_document())
    }

    async fn load(&self, result: TrackerDocument) -> Result<LoadSummary> {
        let json = to_ascii_pretty_json(&result)?;
        self.storage
            .write_file(self.config.output_path(), &json)
            .await?;

        Ok(LoadSummary {
            output_path: self.config.output_path().to_string(),
            count: result.trackers.len(),
        })
    }
}
