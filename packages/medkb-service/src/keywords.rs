use std::{cmp::Ordering, collections::HashMap};

use uuid::Uuid;

use crate::{Result, SearchService};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PopularKeyword {
	pub keyword: String,
	/// Entries carrying this keyword.
	pub count: u32,
	/// Name of the category contributing the most uses.
	pub primary_category: Option<String>,
}

impl SearchService {
	/// Most used display keywords across the indexed entries, ordered
	/// by count descending then keyword ascending.
	pub fn popular_keywords(&self, limit: u32) -> Result<Vec<PopularKeyword>> {
		let generation = self.generation()?;
		let mut usage: HashMap<&str, HashMap<Uuid, u32>> = HashMap::new();

		for entry in &generation.entries {
			for keyword in &entry.keywords {
				*usage.entry(keyword.as_str()).or_default().entry(entry.category_id).or_insert(0) +=
					1;
			}
		}

		let mut out: Vec<PopularKeyword> = usage
			.into_iter()
			.map(|(keyword, by_category)| {
				let count = by_category.values().sum();
				let primary_category = by_category
					.into_iter()
					.filter_map(|(category_id, uses)| {
						generation
							.categories
							.get(&category_id)
							.map(|category| (category.name.clone(), uses))
					})
					.max_by(|a, b| match a.1.cmp(&b.1) {
						// Deterministic choice between equally used categories.
						Ordering::Equal => b.0.cmp(&a.0),
						other => other,
					})
					.map(|(name, _)| name);

				PopularKeyword { keyword: keyword.to_string(), count, primary_category }
			})
			.collect();

		out.sort_by(|a, b| match b.count.cmp(&a.count) {
			Ordering::Equal => a.keyword.cmp(&b.keyword),
			other => other,
		});
		out.truncate(limit as usize);

		Ok(out)
	}
}
