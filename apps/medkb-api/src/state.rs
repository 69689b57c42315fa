use std::sync::Arc;

use medkb_service::SearchService;
use medkb_store::MemoryStore;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<SearchService>,
}
impl AppState {
	pub fn new(config: medkb_config::Config) -> Self {
		let store = Arc::new(MemoryStore::new());
		let service = Arc::new(SearchService::new(config, store));

		Self { service }
	}
}
