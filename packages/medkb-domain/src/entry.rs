use time::OffsetDateTime;
use uuid::Uuid;

/// A single knowledge-base record answering a topical question.
///
/// `title` and `body` together must carry tokenizable content; an entry
/// that normalizes to zero tokens is skipped at index time.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct KnowledgeEntry {
	pub entry_id: Uuid,
	pub title: String,
	pub category_id: Uuid,
	/// Insertion order is preserved for display; matching ignores it.
	pub keywords: Vec<String>,
	pub body: String,
	/// Free-text provenance label.
	pub source: Option<String>,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Category {
	pub category_id: Uuid,
	pub name: String,
	/// Inactive categories are excluded from unfiltered searches but may
	/// be requested explicitly.
	pub active: bool,
}
