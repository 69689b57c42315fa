use std::cmp::Ordering;

use uuid::Uuid;

use crate::{Error, Result, scorer};
use medkb_config::Ranking;
use medkb_index::{IndexGeneration, IndexedEntry};

#[derive(Debug, Clone, Copy)]
pub(crate) struct RankedCandidate<'a> {
	pub entry: &'a IndexedEntry,
	pub score: f32,
	/// 1-based position in the full sorted candidate list, not the page.
	pub rank: u32,
}

/// Filter, score, sort, and paginate one query against a generation.
///
/// Returns the requested page plus the total candidate count before
/// pagination. The sort is a strict total order: score descending,
/// `updated_at` descending, `entry_id` ascending.
pub(crate) fn plan<'a>(
	ranking: &Ranking,
	query_tokens: &[String],
	generation: &'a IndexGeneration,
	category_filter: Option<Uuid>,
	limit: u32,
	offset: u32,
) -> Result<(Vec<RankedCandidate<'a>>, u32)> {
	if let Some(category_id) = category_filter
		&& !generation.categories.contains_key(&category_id)
	{
		return Err(Error::Validation {
			message: format!("Unknown category filter {category_id}."),
		});
	}

	let mut candidates: Vec<(&IndexedEntry, f32)> = Vec::new();

	for entry in &generation.entries {
		match category_filter {
			// An explicit filter reaches inactive categories too.
			Some(category_id) =>
				if entry.category_id != category_id {
					continue;
				},
			None => {
				let active = generation
					.categories
					.get(&entry.category_id)
					.map(|category| category.active)
					.unwrap_or(false);

				if !active {
					continue;
				}
			},
		}

		let score = scorer::score(ranking, query_tokens, entry);

		if score > 0.0 {
			candidates.push((entry, score));
		}
	}

	candidates.sort_by(|a, b| match b.1.total_cmp(&a.1) {
		Ordering::Equal => match b.0.updated_at.cmp(&a.0.updated_at) {
			Ordering::Equal => a.0.entry_id.cmp(&b.0.entry_id),
			other => other,
		},
		other => other,
	});

	let total = candidates.len() as u32;
	let page = candidates
		.into_iter()
		.enumerate()
		.skip(offset as usize)
		.take(limit as usize)
		.map(|(index, (entry, score))| RankedCandidate { entry, score, rank: index as u32 + 1 })
		.collect();

	Ok((page, total))
}
