use std::{
	collections::HashMap,
	sync::{PoisonError, RwLock},
	time::{Duration, Instant},
};

use uuid::Uuid;

use crate::search::SearchItem;

const CACHE_SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Clone)]
pub(crate) struct CachedResults {
	pub items: Vec<SearchItem>,
	pub total_candidates: u32,
}

#[derive(Debug)]
struct Slot {
	results: CachedResults,
	/// Index generation the results were computed against.
	generation: u64,
	stored_at: Instant,
}

/// Memoizes ranked result pages per query shape.
///
/// A slot is a miss once its TTL expires or its generation no longer
/// matches the active one, so results computed against a superseded
/// index are never served. All operations are best-effort; the cache
/// can never fail a search.
#[derive(Debug)]
pub(crate) struct ResultCache {
	enabled: bool,
	ttl: Duration,
	slots: RwLock<HashMap<String, Slot>>,
}
impl ResultCache {
	pub fn new(enabled: bool, ttl: Duration) -> Self {
		Self { enabled, ttl, slots: RwLock::new(HashMap::new()) }
	}

	/// Key over every query-shaping parameter, so differently filtered
	/// or paginated queries can never poison each other.
	pub fn key(
		query_tokens: &[String],
		category_filter: Option<Uuid>,
		limit: u32,
		offset: u32,
	) -> String {
		let payload = serde_json::json!({
			"schema_version": CACHE_SCHEMA_VERSION,
			"tokens": query_tokens,
			"category_filter": category_filter,
			"limit": limit,
			"offset": offset,
		});
		let raw = payload.to_string();

		blake3::hash(raw.as_bytes()).to_hex().to_string()
	}

	pub fn get(&self, key: &str, generation: u64) -> Option<CachedResults> {
		if !self.enabled {
			return None;
		}

		let slots = self.slots.read().unwrap_or_else(PoisonError::into_inner);
		let slot = slots.get(key)?;

		if slot.generation != generation {
			return None;
		}
		if slot.stored_at.elapsed() > self.ttl {
			return None;
		}

		Some(slot.results.clone())
	}

	pub fn put(&self, key: String, generation: u64, results: CachedResults) {
		if !self.enabled {
			return;
		}

		let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);

		slots.insert(key, Slot { results, generation, stored_at: Instant::now() });
	}

	/// Bulk-clears slots computed against generations older than
	/// `sequence`. Called after every successful publish.
	pub fn purge_generations_before(&self, sequence: u64) {
		let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
		let before = slots.len();

		slots.retain(|_, slot| slot.generation >= sequence);

		let purged = before - slots.len();

		if purged > 0 {
			tracing::debug!(purged, sequence, "Purged stale result cache slots.");
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn results() -> CachedResults {
		CachedResults { items: Vec::new(), total_candidates: 0 }
	}

	#[test]
	fn key_distinguishes_pagination_and_filter() {
		let tokens = vec!["化".to_string(), "疗".to_string()];
		let filter = Some(Uuid::new_v4());
		let base = ResultCache::key(&tokens, None, 10, 0);

		assert_ne!(base, ResultCache::key(&tokens, None, 10, 5));
		assert_ne!(base, ResultCache::key(&tokens, None, 5, 0));
		assert_ne!(base, ResultCache::key(&tokens, filter, 10, 0));
		assert_eq!(base, ResultCache::key(&tokens, None, 10, 0));
	}

	#[test]
	fn stale_generation_misses() {
		let cache = ResultCache::new(true, Duration::from_secs(600));

		cache.put("k".to_string(), 1, results());

		assert!(cache.get("k", 1).is_some());
		assert!(cache.get("k", 2).is_none());
	}

	#[test]
	fn purge_drops_older_generations_only() {
		let cache = ResultCache::new(true, Duration::from_secs(600));

		cache.put("old".to_string(), 1, results());
		cache.put("new".to_string(), 2, results());
		cache.purge_generations_before(2);

		assert!(cache.get("old", 1).is_none());
		assert!(cache.get("new", 2).is_some());
	}

	#[test]
	fn expired_ttl_misses() {
		let cache = ResultCache::new(true, Duration::from_millis(0));

		cache.put("k".to_string(), 1, results());

		std::thread::sleep(Duration::from_millis(5));

		assert!(cache.get("k", 1).is_none());
	}

	#[test]
	fn disabled_cache_never_hits() {
		let cache = ResultCache::new(false, Duration::from_secs(600));

		cache.put("k".to_string(), 1, results());

		assert!(cache.get("k", 1).is_none());
	}
}
