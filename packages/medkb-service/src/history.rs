use std::{
	collections::{HashMap, VecDeque},
	sync::{PoisonError, RwLock},
};

use time::OffsetDateTime;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchHistoryRecord {
	pub query: String,
	#[serde(with = "time::serde::rfc3339")]
	pub searched_at: OffsetDateTime,
}

/// Per-session ring buffer of recent raw queries.
///
/// Recording is best-effort by contract; nothing here can fail a
/// search. The oldest record is evicted once a session reaches
/// capacity.
#[derive(Debug)]
pub struct HistoryLog {
	capacity: usize,
	sessions: RwLock<HashMap<String, VecDeque<SearchHistoryRecord>>>,
}
impl HistoryLog {
	pub fn new(capacity: usize) -> Self {
		Self { capacity: capacity.max(1), sessions: RwLock::new(HashMap::new()) }
	}

	pub fn record(&self, session_id: &str, query: &str, now: OffsetDateTime) {
		let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
		let records = sessions.entry(session_id.to_string()).or_default();

		records.push_back(SearchHistoryRecord { query: query.to_string(), searched_at: now });

		while records.len() > self.capacity {
			records.pop_front();
		}
	}

	/// Most recent first.
	pub fn for_session(&self, session_id: &str) -> Vec<SearchHistoryRecord> {
		let sessions = self.sessions.read().unwrap_or_else(PoisonError::into_inner);

		sessions
			.get(session_id)
			.map(|records| records.iter().rev().cloned().collect())
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn evicts_oldest_beyond_capacity() {
		let log = HistoryLog::new(3);

		for query in ["a", "b", "c", "d"] {
			log.record("s1", query, OffsetDateTime::UNIX_EPOCH);
		}

		let queries: Vec<String> =
			log.for_session("s1").into_iter().map(|record| record.query).collect();

		assert_eq!(queries, vec!["d", "c", "b"]);
	}

	#[test]
	fn sessions_are_isolated() {
		let log = HistoryLog::new(3);

		log.record("s1", "化疗", OffsetDateTime::UNIX_EPOCH);

		assert_eq!(log.for_session("s1").len(), 1);
		assert!(log.for_session("s2").is_empty());
	}
}
