use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub index: Index,
	pub search: Search,
	pub ranking: Ranking,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub admin_bind: String,
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Index {
	/// Seconds between periodic full rebuilds.
	#[serde(default = "default_refresh_interval_secs")]
	pub refresh_interval_secs: u64,
	#[serde(default = "default_retry_backoff_base_ms")]
	pub retry_backoff_base_ms: u64,
	#[serde(default = "default_retry_backoff_max_ms")]
	pub retry_backoff_max_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Search {
	#[serde(default = "default_limit")]
	pub default_limit: u32,
	#[serde(default = "default_max_limit")]
	pub max_limit: u32,
	/// Characters of body text included in each result preview.
	#[serde(default = "default_preview_chars")]
	pub preview_chars: u32,
	/// Per-session query history capacity.
	#[serde(default = "default_history_size")]
	pub history_size: u32,
	pub cache: SearchCache,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchCache {
	pub enabled: bool,
	#[serde(default = "default_cache_ttl_secs")]
	pub ttl_secs: u64,
}

/// Per-field weights for the lexical scorer. The ordering policy
/// `title >= keyword >= body` is validated at startup; the exact values
/// are tunable.
#[derive(Debug, Clone, Deserialize)]
pub struct Ranking {
	#[serde(default = "default_title_weight")]
	pub title_weight: f32,
	#[serde(default = "default_keyword_weight")]
	pub keyword_weight: f32,
	#[serde(default = "default_body_weight")]
	pub body_weight: f32,
	/// Body term-frequency contributions saturate at this many
	/// occurrences per token.
	#[serde(default = "default_body_occurrence_cap")]
	pub body_occurrence_cap: u32,
}

impl Default for Ranking {
	fn default() -> Self {
		Self {
			title_weight: default_title_weight(),
			keyword_weight: default_keyword_weight(),
			body_weight: default_body_weight(),
			body_occurrence_cap: default_body_occurrence_cap(),
		}
	}
}

fn default_refresh_interval_secs() -> u64 {
	300
}

fn default_retry_backoff_base_ms() -> u64 {
	500
}

fn default_retry_backoff_max_ms() -> u64 {
	30_000
}

fn default_limit() -> u32 {
	10
}

fn default_max_limit() -> u32 {
	100
}

fn default_preview_chars() -> u32 {
	120
}

fn default_history_size() -> u32 {
	10
}

fn default_cache_ttl_secs() -> u64 {
	600
}

fn default_title_weight() -> f32 {
	3.0
}

fn default_keyword_weight() -> f32 {
	2.0
}

fn default_body_weight() -> f32 {
	1.0
}

fn default_body_occurrence_cap() -> u32 {
	5
}
