mod error;
pub mod memory;

pub use error::{Error, Result};
pub use memory::MemoryStore;

use std::{future::Future, pin::Pin};

use uuid::Uuid;

use medkb_domain::{Category, KnowledgeEntry};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Durable storage of knowledge entries and categories.
///
/// The engine treats storage as an external collaborator: the index
/// builder performs bulk scans on rebuild and the admin layer performs
/// CRUD. Implementations must be safe for concurrent callers.
pub trait EntryStore
where
	Self: Send + Sync,
{
	fn list_entries(&self) -> BoxFuture<'_, Result<Vec<KnowledgeEntry>>>;

	fn list_categories(&self) -> BoxFuture<'_, Result<Vec<Category>>>;

	fn get_entry(&self, entry_id: Uuid) -> BoxFuture<'_, Result<KnowledgeEntry>>;

	fn upsert_entry(&self, entry: KnowledgeEntry) -> BoxFuture<'_, Result<()>>;

	fn delete_entry(&self, entry_id: Uuid) -> BoxFuture<'_, Result<()>>;

	fn upsert_category(&self, category: Category) -> BoxFuture<'_, Result<()>>;

	fn delete_category(&self, category_id: Uuid) -> BoxFuture<'_, Result<()>>;
}
