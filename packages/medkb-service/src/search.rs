use std::time::Instant;

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
	Error, Result, SearchService,
	cache::{CachedResults, ResultCache},
	planner,
};
use medkb_domain::tokenize::query_tokens;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub query: String,
	#[serde(default)]
	pub category_id: Option<Uuid>,
	#[serde(default)]
	pub limit: Option<u32>,
	#[serde(default)]
	pub offset: Option<u32>,
	/// Queries are recorded into this session's history when present.
	#[serde(default)]
	pub session_id: Option<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchItem {
	pub entry_id: Uuid,
	pub title: String,
	pub category_name: String,
	pub score: f32,
	/// 1-based position in the full sorted candidate list.
	pub rank: u32,
	pub preview: String,
	pub source: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub items: Vec<SearchItem>,
	/// Candidates with a positive score, before pagination.
	pub total_candidates: u32,
	/// Index generation the results were computed against. `None` for
	/// an empty query, which never consults the index.
	pub generation: Option<u64>,
	pub took_millis: u64,
}

impl SearchService {
	/// The Search Gateway contract: validate, consult the cache, fall
	/// back to planning, record history.
	pub fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
		let started = Instant::now();
		let limit = request.limit.unwrap_or(self.cfg.search.default_limit);
		let offset = request.offset.unwrap_or(0);

		if limit == 0 || limit > self.cfg.search.max_limit {
			return Err(Error::Validation {
				message: format!(
					"limit must be in the range 1-{}.",
					self.cfg.search.max_limit
				),
			});
		}

		// Best-effort side effect; never fails the search.
		if let Some(session_id) = request.session_id.as_deref() {
			self.history.record(session_id, &request.query, OffsetDateTime::now_utc());
		}

		let tokens = query_tokens(&request.query);

		if tokens.is_empty() {
			return Ok(SearchResponse {
				items: Vec::new(),
				total_candidates: 0,
				generation: None,
				took_millis: took_millis(started),
			});
		}

		let generation = self.generation()?;
		let key = ResultCache::key(&tokens, request.category_id, limit, offset);

		if let Some(cached) = self.cache().get(&key, generation.sequence) {
			tracing::debug!(generation = generation.sequence, "Result cache hit.");

			return Ok(SearchResponse {
				items: cached.items,
				total_candidates: cached.total_candidates,
				generation: Some(generation.sequence),
				took_millis: took_millis(started),
			});
		}

		let (page, total_candidates) = planner::plan(
			&self.cfg.ranking,
			&tokens,
			&generation,
			request.category_id,
			limit,
			offset,
		)?;
		let items: Vec<SearchItem> = page
			.into_iter()
			.map(|candidate| SearchItem {
				entry_id: candidate.entry.entry_id,
				title: candidate.entry.title.clone(),
				category_name: generation
					.categories
					.get(&candidate.entry.category_id)
					.map(|category| category.name.clone())
					.unwrap_or_default(),
				score: candidate.score,
				rank: candidate.rank,
				preview: candidate.entry.preview.clone(),
				source: candidate.entry.source.clone(),
				updated_at: candidate.entry.updated_at,
			})
			.collect();

		self.cache().put(key, generation.sequence, CachedResults {
			items: items.clone(),
			total_candidates,
		});

		Ok(SearchResponse {
			items,
			total_candidates,
			generation: Some(generation.sequence),
			took_millis: took_millis(started),
		})
	}
}

fn took_millis(started: Instant) -> u64 {
	started.elapsed().as_millis() as u64
}
