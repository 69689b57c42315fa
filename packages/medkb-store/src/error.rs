pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Entry store unavailable: {message}")]
	Unavailable { message: String },
	#[error("Not found: {id}")]
	NotFound { id: uuid::Uuid },
	#[error("Conflict: {message}")]
	Conflict { message: String },
}
