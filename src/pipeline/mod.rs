// src/pipeline/mod.rs
//! Visits the dex range in order, one page at a time, and persists each
//! fully assembled entry with its sprites.

use std::path::PathBuf;
use std::time::Duration;

use crate::extractors::{Document, PairingPolicy, RecordAssembler};
use crate::serebii::client::{dex_page_url, Fetcher, DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::serebii::models::format_id;
use crate::serebii::{locate_assets, CatalogEntry};
use crate::storage::StorageManager;
use crate::utils::AppError;

pub const FIRST_ID: u16 = 1;
pub const LAST_ID: u16 = 151;
/// Pause between entries; a politeness policy, not tunable per request.
pub const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub base_url: String,
    pub user_agent: String,
    pub output_dir: PathBuf,
    pub first_id: u16,
    pub last_id: u16,
    pub delay: Duration,
    pub damage_pairing: PairingPolicy,
    pub debug: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output_dir: PathBuf::from("data"),
            first_id: FIRST_ID,
            last_id: LAST_ID,
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
            damage_pairing: PairingPolicy::default(),
            debug: false,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.first_id == 0 || self.first_id > self.last_id || self.last_id > 999 {
            return Err(AppError::Config(format!(
                "Invalid dex range {}..={} (must be within 1..=999 and ascending)",
                self.first_id, self.last_id
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub succeeded: Vec<String>,
    pub failed: Vec<(String, String)>,
}

pub struct Pipeline<F: Fetcher> {
    fetcher: F,
    storage: StorageManager,
    assembler: RecordAssembler,
    config: PipelineConfig,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, storage: StorageManager, config: PipelineConfig) -> Self {
        Self {
            fetcher,
            storage,
            assembler: RecordAssembler::new(config.damage_pairing),
            config,
        }
    }

    /// Processes the configured range. Per-entry failures are logged and
    /// counted; only failing to write the aggregate file is an error.
    pub async fn run(&self) -> Result<RunSummary, AppError> {
        let mut summary = RunSummary::default();
        let mut entries: Vec<CatalogEntry> = Vec::new();

        for number in self.config.first_id..=self.config.last_id {
            if number != self.config.first_id && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }

            let id = format_id(number);
            match self.process_entry(&id).await {
                Ok(entry) => {
                    summary.succeeded.push(id);
                    entries.push(entry);
                }
                Err(e) => {
                    tracing::error!("#{} skipped: {}", id, e);
                    summary.failed.push((id, e.to_string()));
                }
            }
        }

        self.storage.save_batch(&entries)?;
        Ok(summary)
    }

    /// Fetch, extract, persist and download sprites for one entry.
    /// A page-level failure returns before anything is written.
    pub async fn process_entry(&self, id: &str) -> Result<CatalogEntry, AppError> {
        let url = dex_page_url(&self.config.base_url, id);
        tracing::info!("Processing #{} from {}", id, url);

        let bytes = self.fetcher.fetch(&url).await?;
        let doc = Document::parse(&bytes)?;

        if self.config.debug {
            let html = String::from_utf8_lossy(&bytes);
            match self.storage.save_debug_page(id, &html) {
                Ok(dir) => tracing::info!("Saved debug pages to {}", dir.display()),
                Err(e) => tracing::warn!("Failed to save debug pages for #{}: {}", id, e),
            }
        }

        let entry = self.assembler.assemble(&doc, Some(id));
        let path = self.storage.save_entry(&entry)?;
        tracing::debug!("Saved #{} to {}", id, path.display());

        let saved_assets = self.download_assets(&entry.id).await;
        tracing::info!(
            "✓ #{} {} ({} types, {} moves, {}/6 sprites)",
            entry.id,
            entry.display_name(),
            entry.types.len(),
            entry.level_up_moves.len() + entry.tm_moves.len(),
            saved_assets
        );
        Ok(entry)
    }

    /// Each sprite is independent: a failure is logged and the rest continue.
    async fn download_assets(&self, id: &str) -> usize {
        let mut saved = 0;
        for asset in locate_assets(&self.config.base_url, id) {
            let bytes = match self.fetcher.fetch(&asset.url).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!("#{} sprite {} not downloaded: {}", id, asset.file_name, e);
                    continue;
                }
            };
            match self.storage.save_asset(id, &asset.file_name, &bytes) {
                Ok(_) => saved += 1,
                Err(e) => tracing::warn!("#{} sprite {} not saved: {}", id, asset.file_name, e),
            }
        }
        saved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::fixtures::BULBASAUR_PAGE;
    use crate::utils::error::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs;

    /// Serves canned bytes per URL; anything else is a 404.
    struct MapFetcher {
        responses: HashMap<String, Vec<u8>>,
        requested: RefCell<Vec<String>>,
    }

    impl MapFetcher {
        fn new() -> Self {
            Self { responses: HashMap::new(), requested: RefCell::new(Vec::new()) }
        }

        fn with(mut self, url: String, body: &[u8]) -> Self {
            self.responses.insert(url, body.to_vec());
            self
        }
    }

    impl Fetcher for MapFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            self.responses
                .get(url)
                .cloned()
                .ok_or(FetchError::Http(reqwest::StatusCode::NOT_FOUND))
        }
    }

    fn config(dir: &std::path::Path, first: u16, last: u16) -> PipelineConfig {
        PipelineConfig {
            output_dir: dir.to_path_buf(),
            first_id: first,
            last_id: last,
            delay: Duration::ZERO,
            ..PipelineConfig::default()
        }
    }

    fn page_url(id: &str) -> String {
        dex_page_url(DEFAULT_BASE_URL, id)
    }

    #[test]
    fn test_missing_sprite_does_not_affect_entry() {
        let dir = tempfile::tempdir().unwrap();
        let mut fetcher = MapFetcher::new().with(page_url("001"), BULBASAUR_PAGE.as_bytes());
        // Five of six sprites exist.
        for asset in locate_assets(DEFAULT_BASE_URL, "001").into_iter().skip(1) {
            fetcher = fetcher.with(asset.url, b"png");
        }

        let storage = StorageManager::new(dir.path()).unwrap();
        let pipeline = Pipeline::new(fetcher, storage, config(dir.path(), 1, 1));
        let summary = tokio_test::block_on(pipeline.run()).unwrap();

        assert_eq!(summary.succeeded, vec!["001"]);
        let sprites: Vec<_> = fs::read_dir(dir.path().join("001").join("sprites")).unwrap().collect();
        assert_eq!(sprites.len(), 5);
        assert!(!dir.path().join("001").join("sprites").join("g001.png").exists());

        let json = fs::read_to_string(dir.path().join("001").join("001.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Bulbasaur");
    }

    #[test]
    fn test_failed_page_is_skipped_and_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MapFetcher::new()
            .with(page_url("001"), BULBASAUR_PAGE.as_bytes())
            .with(page_url("003"), b"<html><head><title>Serebii.net - #003 - Venusaur</title></head></html>");

        let storage = StorageManager::new(dir.path()).unwrap();
        let pipeline = Pipeline::new(fetcher, storage, config(dir.path(), 1, 3));
        let summary = tokio_test::block_on(pipeline.run()).unwrap();

        assert_eq!(summary.succeeded, vec!["001", "003"]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].0, "002");
        assert!(!dir.path().join("002").exists());

        let aggregate = fs::read_to_string(dir.path().join(crate::storage::AGGREGATE_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&aggregate).unwrap();
        let ids: Vec<&str> = value.as_array().unwrap().iter().map(|e| e["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["001", "003"]);
        assert_eq!(value[1]["name"], "Venusaur");
    }

    #[test]
    fn test_pages_are_visited_in_ascending_order() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let pipeline = Pipeline::new(MapFetcher::new(), storage, config(dir.path(), 7, 9));
        let summary = tokio_test::block_on(pipeline.run()).unwrap();

        assert!(summary.succeeded.is_empty());
        let requested = pipeline.fetcher.requested.borrow();
        assert_eq!(*requested, vec![page_url("007"), page_url("008"), page_url("009")]);
    }

    #[test]
    fn test_empty_page_drops_entry() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MapFetcher::new().with(page_url("010"), b"   ");
        let storage = StorageManager::new(dir.path()).unwrap();
        let pipeline = Pipeline::new(fetcher, storage, config(dir.path(), 10, 10));

        let result = tokio_test::block_on(pipeline.process_entry("010"));
        assert!(matches!(result, Err(AppError::Extraction(_))));
        assert!(!dir.path().join("010").exists());
    }

    #[test]
    fn test_mismatched_title_keeps_requested_id() {
        let dir = tempfile::tempdir().unwrap();
        let page = b"<html><head><title>Serebii.net - #001 - Bulbasaur</title></head></html>";
        let fetcher = MapFetcher::new().with(page_url("001"), page).with(page_url("002"), page);

        let storage = StorageManager::new(dir.path()).unwrap();
        let pipeline = Pipeline::new(fetcher, storage, config(dir.path(), 1, 2));
        let summary = tokio_test::block_on(pipeline.run()).unwrap();

        assert_eq!(summary.succeeded, vec!["001", "002"]);
        assert!(dir.path().join("002").join("002.json").exists());

        let aggregate = fs::read_to_string(dir.path().join(crate::storage::AGGREGATE_FILE_NAME)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&aggregate).unwrap();
        let ids: Vec<&str> = value.as_array().unwrap().iter().map(|e| e["id"].as_str().unwrap()).collect();
        assert_eq!(ids, ["001", "002"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delay_only_between_entries() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path()).unwrap();
        let delay = Duration::from_millis(200);
        let config = PipelineConfig { delay, ..config(dir.path(), 1, 3) };
        let pipeline = Pipeline::new(MapFetcher::new(), storage, config);

        let start = tokio::time::Instant::now();
        let summary = pipeline.run().await.unwrap();
        let elapsed = start.elapsed();

        assert_eq!(summary.failed.len(), 3);
        assert!(elapsed >= delay * 2, "waited {:?}", elapsed);
        assert!(elapsed < delay * 3, "waited {:?}", elapsed);
    }

    #[test]
    fn test_config_validation() {
        assert!(PipelineConfig::default().validate().is_ok());
        let bad = PipelineConfig { first_id: 0, ..PipelineConfig::default() };
        assert!(bad.validate().is_err());
        let bad = PipelineConfig { first_id: 20, last_id: 10, ..PipelineConfig::default() };
        assert!(bad.validate().is_err());
    }
}
