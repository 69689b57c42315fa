//! Fixture builders shared by the integration suites.

use std::sync::Arc;

use time::OffsetDateTime;
use uuid::Uuid;

use medkb_config::{Config, Index, Ranking, Search, SearchCache, Service};
use medkb_domain::{Category, KnowledgeEntry};
use medkb_service::SearchService;
use medkb_store::{EntryStore, MemoryStore};

pub fn config() -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:8080".to_string(),
			admin_bind: "127.0.0.1:8081".to_string(),
			log_level: "info".to_string(),
		},
		index: Index {
			refresh_interval_secs: 300,
			retry_backoff_base_ms: 500,
			retry_backoff_max_ms: 30_000,
		},
		search: Search {
			default_limit: 10,
			max_limit: 100,
			preview_chars: 120,
			history_size: 10,
			cache: SearchCache { enabled: true, ttl_secs: 600 },
		},
		ranking: Ranking::default(),
	}
}

pub fn category(name: &str) -> Category {
	Category { category_id: Uuid::new_v4(), name: name.to_string(), active: true }
}

pub fn inactive_category(name: &str) -> Category {
	Category { category_id: Uuid::new_v4(), name: name.to_string(), active: false }
}

pub fn entry(category_id: Uuid, title: &str, keywords: &[&str], body: &str) -> KnowledgeEntry {
	entry_at(category_id, title, keywords, body, OffsetDateTime::UNIX_EPOCH)
}

pub fn entry_at(
	category_id: Uuid,
	title: &str,
	keywords: &[&str],
	body: &str,
	updated_at: OffsetDateTime,
) -> KnowledgeEntry {
	KnowledgeEntry {
		entry_id: Uuid::new_v4(),
		title: title.to_string(),
		category_id,
		keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
		body: body.to_string(),
		source: None,
		updated_at,
	}
}

/// A service wired to a seeded in-memory store with one published
/// generation.
pub async fn service_with(
	categories: Vec<Category>,
	entries: Vec<KnowledgeEntry>,
) -> Arc<SearchService> {
	let service = cold_service_with(categories, entries).await;

	service.rebuild().await.expect("Expected initial rebuild to succeed.");

	service
}

/// Same as [`service_with`] but without the initial rebuild, so the
/// cold-start path can be exercised.
pub async fn cold_service_with(
	categories: Vec<Category>,
	entries: Vec<KnowledgeEntry>,
) -> Arc<SearchService> {
	let store = MemoryStore::new();

	for category in categories {
		store.upsert_category(category).await.expect("Expected category seed to succeed.");
	}
	for entry in entries {
		store.upsert_entry(entry).await.expect("Expected entry seed to succeed.");
	}

	Arc::new(SearchService::new(config(), Arc::new(store)))
}
