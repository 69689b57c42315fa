mod build;
mod handle;

pub use build::build;
pub use handle::IndexHandle;

use std::collections::{HashMap, HashSet};

use time::OffsetDateTime;
use uuid::Uuid;

/// The searchable projection of one knowledge entry, denormalized so
/// the read path never touches the entry store.
#[derive(Debug, Clone)]
pub struct IndexedEntry {
	pub entry_id: Uuid,
	pub category_id: Uuid,
	pub title: String,
	pub preview: String,
	pub source: Option<String>,
	pub updated_at: OffsetDateTime,
	/// Display-form keywords, insertion order preserved.
	pub keywords: Vec<String>,
	pub title_tokens: HashSet<String>,
	pub keyword_tokens: HashSet<String>,
	/// Token -> occurrence count (term frequency).
	pub body_tokens: HashMap<String, u32>,
}

#[derive(Debug, Clone)]
pub struct CategoryInfo {
	pub name: String,
	pub active: bool,
}

/// One immutable build of the searchable index.
///
/// Generations are never mutated after publication; readers holding an
/// `Arc` keep the generation alive until they finish, even after a
/// newer generation is swapped in.
#[derive(Debug)]
pub struct IndexGeneration {
	pub sequence: u64,
	pub built_at: OffsetDateTime,
	pub entries: Vec<IndexedEntry>,
	pub categories: HashMap<Uuid, CategoryInfo>,
	/// Entries dropped because they tokenized to nothing.
	pub skipped: u32,
}
