use std::{
	collections::HashMap,
	sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use uuid::Uuid;

use crate::{BoxFuture, EntryStore, Error, Result};
use medkb_domain::{Category, KnowledgeEntry};

#[derive(Debug, Default)]
struct Inner {
	entries: HashMap<Uuid, KnowledgeEntry>,
	categories: HashMap<Uuid, Category>,
}

/// In-memory [`EntryStore`] used by tests and the bundled demo
/// deployment. Never reports `Unavailable`.
#[derive(Debug, Default)]
pub struct MemoryStore {
	inner: RwLock<Inner>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	fn read(&self) -> RwLockReadGuard<'_, Inner> {
		self.inner.read().unwrap_or_else(PoisonError::into_inner)
	}

	fn write(&self) -> RwLockWriteGuard<'_, Inner> {
		self.inner.write().unwrap_or_else(PoisonError::into_inner)
	}
}
impl EntryStore for MemoryStore {
	fn list_entries(&self) -> BoxFuture<'_, Result<Vec<KnowledgeEntry>>> {
		Box::pin(async move { Ok(self.read().entries.values().cloned().collect()) })
	}

	fn list_categories(&self) -> BoxFuture<'_, Result<Vec<Category>>> {
		Box::pin(async move { Ok(self.read().categories.values().cloned().collect()) })
	}

	fn get_entry(&self, entry_id: Uuid) -> BoxFuture<'_, Result<KnowledgeEntry>> {
		Box::pin(async move {
			self.read().entries.get(&entry_id).cloned().ok_or(Error::NotFound { id: entry_id })
		})
	}

	fn upsert_entry(&self, entry: KnowledgeEntry) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			let mut inner = self.write();

			if !inner.categories.contains_key(&entry.category_id) {
				return Err(Error::Conflict {
					message: format!("Entry references unknown category {}.", entry.category_id),
				});
			}

			inner.entries.insert(entry.entry_id, entry);

			Ok(())
		})
	}

	fn delete_entry(&self, entry_id: Uuid) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			self.write().entries.remove(&entry_id).map(|_| ()).ok_or(Error::NotFound {
				id: entry_id,
			})
		})
	}

	fn upsert_category(&self, category: Category) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			let mut inner = self.write();
			let duplicate = inner.categories.values().any(|existing| {
				existing.category_id != category.category_id && existing.name == category.name
			});

			if duplicate {
				return Err(Error::Conflict {
					message: format!("Category name {:?} already exists.", category.name),
				});
			}

			inner.categories.insert(category.category_id, category);

			Ok(())
		})
	}

	fn delete_category(&self, category_id: Uuid) -> BoxFuture<'_, Result<()>> {
		Box::pin(async move {
			let mut inner = self.write();

			if inner.entries.values().any(|entry| entry.category_id == category_id) {
				return Err(Error::Conflict {
					message: format!("Category {category_id} still has entries."),
				});
			}

			inner
				.categories
				.remove(&category_id)
				.map(|_| ())
				.ok_or(Error::NotFound { id: category_id })
		})
	}
}
