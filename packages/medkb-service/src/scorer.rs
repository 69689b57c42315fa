use medkb_config::Ranking;
use medkb_index::IndexedEntry;

/// Score one indexed entry against the distinct query tokens.
///
/// Each token contributes through its highest-priority matching field
/// only: title, else keywords, else body. Body contributions use term
/// frequency saturated at `body_occurrence_cap`, so long bodies cannot
/// dominate. Deterministic and explainable without any model call.
pub fn score(ranking: &Ranking, query_tokens: &[String], entry: &IndexedEntry) -> f32 {
	let mut total = 0.0_f32;

	for token in query_tokens {
		if entry.title_tokens.contains(token) {
			total += ranking.title_weight;
		} else if entry.keyword_tokens.contains(token) {
			total += ranking.keyword_weight;
		} else if let Some(count) = entry.body_tokens.get(token) {
			total += ranking.body_weight * (*count).min(ranking.body_occurrence_cap) as f32;
		}
	}

	total
}
