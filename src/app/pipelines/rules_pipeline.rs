use crate::config::RulesConfig;
use crate::core::{ConfigProvider, LoadSummary, Pipeline, RuleSet, Storage, TrackerDocument};
use crate::domain::model::{BlockRule, RuleAction, RuleCondition, RuleStats};
use crate::utils::error::Result;
use std::collections::HashSet;

pub const RESOURCE_TYPES: [&str; 13] = [
    "main_frame",
    "sub_frame",
    "stylesheet",
    "script",
    "image",
    "font",
    "object",
    "xmlhttprequest",
    "ping",
    "media",
    "websocket",
    "webtransport",
    "other",
];

/// Well-known trackers that are always placed ahead of the rest so they
/// survive the rule cap.
pub const PRIORITY_TRACKERS: &[&str] = &[
    "doubleclick.net",
    "google-analytics.com",
    "googletagmanager.com",
    "googlesyndication.com",
    "googleadservices.com",
    "facebook.com",
    "connect.facebook.net",
    "facebook.net",
    "twitter.com",
    "linkedin.com",
    "scorecardresearch.com",
    "quantserve.com",
    "adnxs.com",
    "amazon-adsystem.com",
    "chartbeat.com",
    "criteo.com",
    "criteo.net",
    "outbrain.com",
    "taboola.com",
    "pubmatic.com",
    "rubiconproject.com",
    "openx.net",
    "adsafeprotected.com",
    "advertising.com",
    "bing.com",
    "yahoo.com",
    "pixel.facebook.com",
    "analytics.twitter.com",
    "ads-twitter.com",
    "mouseflow.com",
    "hotjar.com",
    "crazyegg.com",
    "luckyorange.com",
    "inspectlet.com",
    "segment.com",
    "segment.io",
    "amplitude.com",
    "mixpanel.com",
    "fullstory.com",
    "loggly.com",
    "newrelic.com",
    "nr-data.net",
    "optimizely.com",
    "pardot.com",
    "salesforce.com",
    "marketo.net",
    "eloqua.com",
    "hubspot.com",
    "doubleclick.com",
    "adservice.google.com",
    "googletag.pubads.com",
];

/// `trackers.json` in, `declarativeNetRequest` rules out.
pub struct RulesPipeline<S: Storage> {
    pub(crate) storage: S,
    pub(crate) config: RulesConfig,
}

impl<S: Storage> RulesPipeline<S> {
    pub fn new(storage: S, config: RulesConfig) -> Self {
        Self { storage, config }
    }
}

/// Lower-cases and dedups (first occurrence wins), moves priority trackers to
/// the front, then caps the list at `max_rules`.
pub fn select_trackers(trackers: &[String], max_rules: usize) -> (Vec<String>, RuleStats) {
    let priority: HashSet<&str> = PRIORITY_TRACKERS.iter().copied().collect();

    let mut seen = HashSet::new();
    let unique: Vec<String> = trackers
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| seen.insert(t.clone()))
        .collect();

    let (mut selected, rest): (Vec<String>, Vec<String>) = unique
        .iter()
        .cloned()
        .partition(|t| priority.contains(t.as_str()));
    selected.extend(rest);
    selected.truncate(max_rules);

    let priority_included = selected
        .iter()
        .filter(|t| priority.contains(t.as_str()))
        .count();

    let stats = RuleStats {
        total_entries: trackers.len(),
        unique_entries: unique.len(),
        priority_included,
        rules_generated: selected.len(),
    };
    (selected, stats)
}

pub fn block_rule(id: usize, domain: &str) -> BlockRule {
    BlockRule {
        id,
        priority: 1,
        action: RuleAction {
            action_type: "block".to_string(),
        },
        condition: RuleCondition {
            url_filter: format!("*{}*", domain),
            resource_types: RESOURCE_TYPES.iter().map(|t| t.to_string()).collect(),
        },
    }
}

#[async_trait::async_trait]
impl<S: Storage> Pipeline for RulesPipeline<S> {
    type Extracted = TrackerDocument;
    type Transformed = RuleSet;

    async fn extract(&self) -> Result<TrackerDocument> {
        tracing::info!("Loading tracker list from {}", self.config.input_path());
        let bytes = self.storage.read_file(self.config.input_path()).await?;
        let document: TrackerDocument = serde_json::from_slice(&bytes)?;
        tracing::info!("Loaded {} trackers", document.trackers.len());
        Ok(document)
    }

    async fn transform(&self, data: TrackerDocument) -> Result<RuleSet> {
        let (blocked, stats) = select_trackers(&data.trackers, self.config.max_rules);

        let rules = blocked
            .iter()
            .enumerate()
            .map(|(index, domain)| block_rule(index + 1, domain))
            .collect();

        tracing::info!(
            "Unique trackers: {}, priority included: {}, rules: {}",
            stats.unique_entries,
            stats.priority_included,
            stats.rules_generated
        );
        tracing::info!(
            "Coverage: {:.1}%, remaining (not blocked): {}",
            stats.coverage_percent(),
            stats.remaining()
        );

        Ok(RuleSet {
            rules,
            blocked,
            stats,
        })
    }

    async fn load(&self, result: RuleSet) -> Result<LoadSummary> {
        let json = serde_json::to_string_pretty(&result.rules)?;
        self.storage
            .write_file(self.config.output_path(), json.as_bytes())
            .await?;

        self.storage
            .write_file(
                &self.config.blocked_list_path,
                result.blocked.join("\n").as_bytes(),
            )
            .await?;
        tracing::debug!("Saved blocked list to {}", self.config.blocked_list_path);

        Ok(LoadSummary {
            output_path: self.config.output_path().to_string(),
            count: result.rules.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::etl::EtlEngine;
    use crate::utils::error::EtlError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                EtlError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_select_puts_priority_first_in_input_order() {
        let input = strings(&[
            "a.example",
            "hotjar.com",
            "b.example",
            "doubleclick.net",
        ]);

        let (selected, stats) = select_trackers(&input, 100);

        assert_eq!(
            selected,
            strings(&["hotjar.com", "doubleclick.net", "a.example", "b.example"])
        );
        assert_eq!(stats.priority_included, 2);
        assert_eq!(stats.rules_generated, 4);
    }

    #[test]
    fn test_select_lowercases_and_dedups() {
        let input = strings(&["Tracker.Example", "tracker.example", "DoubleClick.net"]);

        let (selected, stats) = select_trackers(&input, 100);

        assert_eq!(selected, strings(&["doubleclick.net", "tracker.example"]));
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.unique_entries, 2);
        assert_eq!(stats.remaining(), 1);
    }

    #[test]
    fn test_select_honours_cap() {
        let input = strings(&["a.example", "b.example", "criteo.com", "c.example"]);

        let (selected, stats) = select_trackers(&input, 2);

        assert_eq!(selected, strings(&["criteo.com", "a.example"]));
        assert_eq!(stats.rules_generated, 2);
        assert_eq!(stats.coverage_percent(), 50.0);
    }

    #[test]
    fn test_block_rule_shape() {
        let rule = block_rule(7, "hotjar.com");
        assert_eq!(rule.id, 7);
        assert_eq!(rule.priority, 1);
        assert_eq!(rule.action.action_type, "block");
        assert_eq!(rule.condition.url_filter, "*hotjar.com*");
        assert_eq!(rule.condition.resource_types.len(), 13);
    }

    #[tokio::test]
    async fn test_run_writes_rules_and_blocked_list() {
        let storage = MockStorage::with_file(
            "trackers.json",
            br#"{"trackers": ["x.example", "segment.io", "x.example"]}"#,
        );
        let pipeline = RulesPipeline::new(storage.clone(), RulesConfig::default());

        let summary = EtlEngine::new(pipeline).run().await.unwrap();

        assert_eq!(summary.count, 2);
        assert_eq!(summary.output_path, "rules.json");

        let rules: serde_json::Value =
            serde_json::from_slice(&storage.get_file("rules.json").await.unwrap()).unwrap();
        assert_eq!(rules[0]["id"], 1);
        assert_eq!(rules[0]["condition"]["urlFilter"], "*segment.io*");
        assert_eq!(rules[1]["id"], 2);
        assert_eq!(rules[1]["condition"]["urlFilter"], "*x.example*");

        let blocked = storage.get_file("blocked-trackers.txt").await.unwrap();
        assert_eq!(blocked, b"segment.io\nx.example");
    }

    #[tokio::test]
    async fn test_missing_trackers_field_fails() {
        let storage = MockStorage::with_file("trackers.json", br#"{"domains": []}"#);
        let pipeline = RulesPipeline::new(storage.clone(), RulesConfig::default());

        let err = EtlEngine::new(pipeline).run().await.unwrap_err();

        assert!(matches!(err, EtlError::SerializationError(_)));
        assert!(storage.get_file("rules.json").await.is_none());
    }
}
