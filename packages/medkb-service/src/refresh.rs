use std::{sync::Arc, time::Duration};

use crate::SearchService;
use medkb_config::Index;

/// Serialized rebuild driver: waits for an explicit rebuild request or
/// the periodic refresh interval, then rebuilds. A store failure keeps
/// the last good generation serving and retries with exponential
/// backoff; the serving path never observes the failure.
pub async fn run_refresh_loop(service: Arc<SearchService>) {
	let interval = Duration::from_secs(service.cfg.index.refresh_interval_secs);

	loop {
		tokio::select! {
			() = service.index.rebuild_requested() => {},
			() = tokio::time::sleep(interval) => {},
		}

		let mut attempt = 0_u32;

		loop {
			match service.rebuild().await {
				Ok(report) => {
					tracing::info!(
						generation = report.generation,
						indexed = report.indexed,
						skipped = report.skipped,
						"Index rebuild complete."
					);

					break;
				},
				Err(err) => {
					attempt = attempt.saturating_add(1);

					let backoff = backoff_for_attempt(&service.cfg.index, attempt);

					tracing::warn!(
						error = %err,
						attempt,
						backoff_ms = backoff.as_millis() as u64,
						"Index rebuild failed. Serving last good generation and retrying."
					);
					tokio::time::sleep(backoff).await;
				},
			}
		}
	}
}

fn backoff_for_attempt(cfg: &Index, attempt: u32) -> Duration {
	let exp = attempt.saturating_sub(1).min(6);
	let base = cfg.retry_backoff_base_ms.saturating_mul(1 << exp);
	let capped = base.min(cfg.retry_backoff_max_ms);

	Duration::from_millis(capped)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn index_cfg() -> Index {
		Index {
			refresh_interval_secs: 300,
			retry_backoff_base_ms: 500,
			retry_backoff_max_ms: 30_000,
		}
	}

	#[test]
	fn backoff_doubles_per_attempt() {
		let cfg = index_cfg();

		assert_eq!(backoff_for_attempt(&cfg, 1), Duration::from_millis(500));
		assert_eq!(backoff_for_attempt(&cfg, 2), Duration::from_millis(1_000));
		assert_eq!(backoff_for_attempt(&cfg, 3), Duration::from_millis(2_000));
	}

	#[test]
	fn backoff_is_capped() {
		let cfg = index_cfg();

		assert_eq!(backoff_for_attempt(&cfg, 20), Duration::from_millis(30_000));
	}
}
