use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;

use crate::{CategoryInfo, IndexGeneration, IndexedEntry};
use medkb_domain::{Category, KnowledgeEntry, tokenize::tokenize};

/// Build a new index generation from a full store scan.
///
/// Pure over its inputs; the caller assigns the generation sequence and
/// publishes the result atomically. Entries with no tokenizable content
/// are skipped and counted, never failed.
pub fn build(
	sequence: u64,
	entries: &[KnowledgeEntry],
	categories: &[Category],
	preview_chars: usize,
	now: OffsetDateTime,
) -> IndexGeneration {
	let mut indexed = Vec::with_capacity(entries.len());
	let mut skipped = 0_u32;

	for entry in entries {
		match index_entry(entry, preview_chars) {
			Some(item) => indexed.push(item),
			None => {
				skipped += 1;

				tracing::warn!(entry_id = %entry.entry_id, "Entry has no tokenizable content. Skipping.");
			},
		}
	}

	if skipped > 0 {
		tracing::warn!(sequence, skipped, "Index build skipped empty entries.");
	}

	let categories = categories
		.iter()
		.map(|category| {
			(category.category_id, CategoryInfo {
				name: category.name.clone(),
				active: category.active,
			})
		})
		.collect();

	tracing::info!(sequence, indexed = indexed.len(), "Index generation built.");

	IndexGeneration { sequence, built_at: now, entries: indexed, categories, skipped }
}

fn index_entry(entry: &KnowledgeEntry, preview_chars: usize) -> Option<IndexedEntry> {
	let title_tokens: HashSet<String> = tokenize(&entry.title).into_iter().collect();
	let keyword_tokens: HashSet<String> =
		entry.keywords.iter().flat_map(|keyword| tokenize(keyword)).collect();
	let mut body_tokens: HashMap<String, u32> = HashMap::new();

	for token in tokenize(&entry.body) {
		*body_tokens.entry(token).or_insert(0) += 1;
	}

	if title_tokens.is_empty() && keyword_tokens.is_empty() && body_tokens.is_empty() {
		return None;
	}

	Some(IndexedEntry {
		entry_id: entry.entry_id,
		category_id: entry.category_id,
		title: entry.title.clone(),
		preview: preview_of(&entry.body, preview_chars),
		source: entry.source.clone(),
		updated_at: entry.updated_at,
		keywords: entry.keywords.clone(),
		title_tokens,
		keyword_tokens,
		body_tokens,
	})
}

fn preview_of(body: &str, preview_chars: usize) -> String {
	let mut out: String = body.chars().take(preview_chars).collect();

	if body.chars().count() > preview_chars {
		out.push('…');
	}

	out
}
