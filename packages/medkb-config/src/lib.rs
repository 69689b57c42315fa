mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Index, Ranking, Search, SearchCache, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.admin_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.admin_bind must be non-empty.".to_string(),
		});
	}
	if cfg.index.refresh_interval_secs == 0 {
		return Err(Error::Validation {
			message: "index.refresh_interval_secs must be greater than zero.".to_string(),
		});
	}
	if cfg.index.retry_backoff_base_ms == 0 {
		return Err(Error::Validation {
			message: "index.retry_backoff_base_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.index.retry_backoff_max_ms < cfg.index.retry_backoff_base_ms {
		return Err(Error::Validation {
			message: "index.retry_backoff_max_ms must be at least index.retry_backoff_base_ms."
				.to_string(),
		});
	}
	if cfg.search.max_limit == 0 || cfg.search.max_limit > 1_000 {
		return Err(Error::Validation {
			message: "search.max_limit must be in the range 1-1000.".to_string(),
		});
	}
	if cfg.search.default_limit == 0 || cfg.search.default_limit > cfg.search.max_limit {
		return Err(Error::Validation {
			message: "search.default_limit must be in the range 1-search.max_limit.".to_string(),
		});
	}
	if cfg.search.preview_chars == 0 {
		return Err(Error::Validation {
			message: "search.preview_chars must be greater than zero.".to_string(),
		});
	}
	if cfg.search.history_size == 0 {
		return Err(Error::Validation {
			message: "search.history_size must be greater than zero.".to_string(),
		});
	}
	if cfg.search.cache.ttl_secs == 0 {
		return Err(Error::Validation {
			message: "search.cache.ttl_secs must be greater than zero.".to_string(),
		});
	}

	for (label, weight) in [
		("ranking.title_weight", cfg.ranking.title_weight),
		("ranking.keyword_weight", cfg.ranking.keyword_weight),
		("ranking.body_weight", cfg.ranking.body_weight),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number."),
			});
		}
		if weight < 0.0 {
			return Err(Error::Validation {
				message: format!("{label} must be zero or greater."),
			});
		}
	}

	if cfg.ranking.title_weight < cfg.ranking.keyword_weight {
		return Err(Error::Validation {
			message: "ranking.title_weight must be at least ranking.keyword_weight.".to_string(),
		});
	}
	if cfg.ranking.keyword_weight < cfg.ranking.body_weight {
		return Err(Error::Validation {
			message: "ranking.keyword_weight must be at least ranking.body_weight.".to_string(),
		});
	}
	if cfg.ranking.body_occurrence_cap == 0 {
		return Err(Error::Validation {
			message: "ranking.body_occurrence_cap must be greater than zero.".to_string(),
		});
	}

	Ok(())
}
