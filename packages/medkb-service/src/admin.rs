use time::OffsetDateTime;
use uuid::Uuid;

use crate::{Error, Result, SearchService};
use medkb_domain::{Category, KnowledgeEntry, tokenize::tokenize};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RebuildReport {
	pub generation: u64,
	pub indexed: u32,
	pub skipped: u32,
}

impl SearchService {
	/// Scan the store, build a fresh generation, publish it atomically,
	/// and drop cache slots computed against older generations. Builds
	/// are serialized: a rebuild requested while another is running
	/// waits for it to finish.
	pub async fn rebuild(&self) -> Result<RebuildReport> {
		let _gate = self.rebuild_gate.lock().await;
		let entries = self.store.list_entries().await?;
		let categories = self.store.list_categories().await?;
		let sequence = self.index.next_sequence();
		let generation = medkb_index::build(
			sequence,
			&entries,
			&categories,
			self.cfg.search.preview_chars as usize,
			OffsetDateTime::now_utc(),
		);
		let report = RebuildReport {
			generation: generation.sequence,
			indexed: generation.entries.len() as u32,
			skipped: generation.skipped,
		};

		self.index.publish(generation);
		self.cache().purge_generations_before(sequence);

		Ok(report)
	}

	pub async fn upsert_entry(&self, mut entry: KnowledgeEntry) -> Result<()> {
		if entry.title.trim().is_empty() {
			return Err(Error::Validation { message: "Entry title must be non-empty.".to_string() });
		}
		if tokenize(&entry.title).is_empty() && tokenize(&entry.body).is_empty() {
			return Err(Error::Validation {
				message: "Entry title and body must carry tokenizable content.".to_string(),
			});
		}

		entry.updated_at = OffsetDateTime::now_utc();

		self.store.upsert_entry(entry).await?;
		self.index.schedule_rebuild();

		Ok(())
	}

	pub async fn delete_entry(&self, entry_id: Uuid) -> Result<()> {
		self.store.delete_entry(entry_id).await?;
		self.index.schedule_rebuild();

		Ok(())
	}

	pub async fn upsert_category(&self, category: Category) -> Result<()> {
		if category.name.trim().is_empty() {
			return Err(Error::Validation {
				message: "Category name must be non-empty.".to_string(),
			});
		}

		self.store.upsert_category(category).await?;
		self.index.schedule_rebuild();

		Ok(())
	}

	pub async fn delete_category(&self, category_id: Uuid) -> Result<()> {
		self.store.delete_category(category_id).await?;
		self.index.schedule_rebuild();

		Ok(())
	}
}
