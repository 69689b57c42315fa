pub mod admin;
pub mod categories;
pub mod history;
pub mod keywords;
pub mod refresh;
pub mod search;
pub mod stats;

mod cache;
mod error;
mod planner;
mod scorer;

pub use admin::RebuildReport;
pub use categories::{CategoryEntry, CategorySummary};
pub use error::{Error, Result};
pub use history::{HistoryLog, SearchHistoryRecord};
pub use keywords::PopularKeyword;
pub use search::{SearchItem, SearchRequest, SearchResponse};
pub use stats::KnowledgeStats;

use std::{sync::Arc, time::Duration};

use cache::ResultCache;
use medkb_config::Config;
use medkb_index::{IndexGeneration, IndexHandle};
use medkb_store::EntryStore;

/// The externally facing retrieval engine: search gateway, result
/// cache, query history, and the rebuild orchestration around the
/// index handle.
pub struct SearchService {
	pub cfg: Config,
	pub store: Arc<dyn EntryStore>,
	pub index: Arc<IndexHandle>,
	pub history: HistoryLog,
	cache: ResultCache,
	/// Admin-triggered and refresh-loop rebuilds serialize here; only
	/// one build scans the store at a time.
	rebuild_gate: tokio::sync::Mutex<()>,
}
impl SearchService {
	pub fn new(cfg: Config, store: Arc<dyn EntryStore>) -> Self {
		let cache = ResultCache::new(
			cfg.search.cache.enabled,
			Duration::from_secs(cfg.search.cache.ttl_secs),
		);
		let history = HistoryLog::new(cfg.search.history_size as usize);

		Self {
			cfg,
			store,
			index: Arc::new(IndexHandle::new()),
			history,
			cache,
			rebuild_gate: tokio::sync::Mutex::new(()),
		}
	}

	pub(crate) fn generation(&self) -> Result<Arc<IndexGeneration>> {
		self.index.current().ok_or(Error::IndexUnavailable)
	}

	pub(crate) fn cache(&self) -> &ResultCache {
		&self.cache
	}
}
