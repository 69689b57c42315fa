pub mod entry;
pub mod tokenize;

pub use entry::{Category, KnowledgeEntry};
