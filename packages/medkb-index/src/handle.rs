use std::sync::{
	Arc, PoisonError, RwLock,
	atomic::{AtomicU64, Ordering},
};

use tokio::sync::Notify;

use crate::IndexGeneration;

/// Shared access to the active index generation.
///
/// Readers clone the `Arc` out of a single `RwLock` slot and then work
/// lock-free against the immutable generation. `publish` is the only
/// write, a single pointer swap. Rebuild requests coalesce through a
/// `Notify` permit: scheduling while a build is in flight queues at most
/// one follow-up build.
#[derive(Debug, Default)]
pub struct IndexHandle {
	current: RwLock<Option<Arc<IndexGeneration>>>,
	sequence: AtomicU64,
	rebuild: Notify,
}
impl IndexHandle {
	pub fn new() -> Self {
		Self::default()
	}

	/// `None` until the first build completes (cold start).
	pub fn current(&self) -> Option<Arc<IndexGeneration>> {
		self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Sequence number the next build should carry.
	pub fn next_sequence(&self) -> u64 {
		self.sequence.fetch_add(1, Ordering::SeqCst) + 1
	}

	/// Installs `generation` unless an equal or newer sequence is
	/// already active, so a slow build finishing late can never regress
	/// the served snapshot. Returns the generation now serving.
	pub fn publish(&self, generation: IndexGeneration) -> Arc<IndexGeneration> {
		let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);

		if let Some(current) = slot.as_ref()
			&& current.sequence >= generation.sequence
		{
			tracing::warn!(
				stale = generation.sequence,
				active = current.sequence,
				"Discarded stale index generation."
			);

			return Arc::clone(current);
		}

		let generation = Arc::new(generation);

		*slot = Some(Arc::clone(&generation));

		generation
	}

	pub fn schedule_rebuild(&self) {
		self.rebuild.notify_one();
	}

	pub async fn rebuild_requested(&self) {
		self.rebuild.notified().await;
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use time::OffsetDateTime;

	use super::*;

	fn generation(sequence: u64) -> IndexGeneration {
		IndexGeneration {
			sequence,
			built_at: OffsetDateTime::UNIX_EPOCH,
			entries: Vec::new(),
			categories: HashMap::new(),
			skipped: 0,
		}
	}

	#[test]
	fn cold_start_has_no_generation() {
		assert!(IndexHandle::new().current().is_none());
	}

	#[test]
	fn publish_swaps_generation_and_keeps_old_readers_valid() {
		let handle = IndexHandle::new();

		handle.publish(generation(handle.next_sequence()));

		let old = handle.current().expect("Expected first generation.");

		handle.publish(generation(handle.next_sequence()));

		let new = handle.current().expect("Expected second generation.");

		assert_eq!(old.sequence, 1);
		assert_eq!(new.sequence, 2);
	}

	#[test]
	fn late_publish_of_an_older_sequence_is_discarded() {
		let handle = IndexHandle::new();
		let first = handle.next_sequence();
		let second = handle.next_sequence();

		handle.publish(generation(second));

		let serving = handle.publish(generation(first));
		let current = handle.current().expect("Expected a generation.");

		assert_eq!(serving.sequence, second);
		assert_eq!(current.sequence, second, "Active generation must not regress.");
	}

	#[tokio::test]
	async fn rebuild_requests_coalesce_into_one_permit() {
		let handle = IndexHandle::new();

		handle.schedule_rebuild();
		handle.schedule_rebuild();
		handle.schedule_rebuild();

		handle.rebuild_requested().await;

		let pending = tokio::time::timeout(
			std::time::Duration::from_millis(20),
			handle.rebuild_requested(),
		)
		.await;

		assert!(pending.is_err(), "Expected no second stored permit.");
	}
}
