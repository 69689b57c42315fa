use time::OffsetDateTime;

use crate::{Result, SearchService};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct KnowledgeStats {
	pub generation: u64,
	#[serde(with = "time::serde::rfc3339")]
	pub built_at: OffsetDateTime,
	pub entry_count: u32,
	pub category_count: u32,
	pub active_category_count: u32,
	/// Entries the last build dropped for having no tokenizable content.
	pub skipped: u32,
}

impl SearchService {
	pub fn stats(&self) -> Result<KnowledgeStats> {
		let generation = self.generation()?;
		let active_category_count =
			generation.categories.values().filter(|category| category.active).count() as u32;

		Ok(KnowledgeStats {
			generation: generation.sequence,
			built_at: generation.built_at,
			entry_count: generation.entries.len() as u32,
			category_count: generation.categories.len() as u32,
			active_category_count,
			skipped: generation.skipped,
		})
	}
}
