use std::{cmp::Ordering, collections::HashMap};

use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, Result, SearchService};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CategorySummary {
	pub category_id: Uuid,
	pub name: String,
	pub active: bool,
	/// Indexed entries in this category (skipped entries excluded).
	pub entry_count: u32,
}

impl SearchService {
	/// All known categories with indexed entry counts, name ascending.
	pub fn list_categories(&self) -> Result<Vec<CategorySummary>> {
		let generation = self.generation()?;
		let mut counts: HashMap<Uuid, u32> = HashMap::new();

		for entry in &generation.entries {
			*counts.entry(entry.category_id).or_insert(0) += 1;
		}

		let mut out: Vec<CategorySummary> = generation
			.categories
			.iter()
			.map(|(category_id, category)| CategorySummary {
				category_id: *category_id,
				name: category.name.clone(),
				active: category.active,
				entry_count: counts.get(category_id).copied().unwrap_or(0),
			})
			.collect();

		out.sort_by(|a, b| a.name.cmp(&b.name));

		Ok(out)
	}

	/// All indexed entries of one category, without a query. Newest
	/// first, then `entry_id` ascending. An inactive category can be
	/// browsed; an unknown one is a validation error.
	pub fn browse_category(&self, category_id: Uuid) -> Result<Vec<CategoryEntry>> {
		let generation = self.generation()?;

		if !generation.categories.contains_key(&category_id) {
			return Err(Error::Validation {
				message: format!("Unknown category {category_id}."),
			});
		}

		let mut out: Vec<CategoryEntry> = generation
			.entries
			.iter()
			.filter(|entry| entry.category_id == category_id)
			.map(|entry| CategoryEntry {
				entry_id: entry.entry_id,
				title: entry.title.clone(),
				preview: entry.preview.clone(),
				source: entry.source.clone(),
				updated_at: entry.updated_at,
			})
			.collect();

		out.sort_by(|a, b| match b.updated_at.cmp(&a.updated_at) {
			Ordering::Equal => a.entry_id.cmp(&b.entry_id),
			other => other,
		});

		Ok(out)
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CategoryEntry {
	pub entry_id: Uuid,
	pub title: String,
	pub preview: String,
	pub source: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}
