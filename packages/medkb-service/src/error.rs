pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	Validation { message: String },
	#[error("No index generation has been published yet.")]
	IndexUnavailable,
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Conflict: {message}")]
	Conflict { message: String },
	#[error("Entry store error: {message}")]
	Store { message: String },
}
impl From<medkb_store::Error> for Error {
	fn from(err: medkb_store::Error) -> Self {
		match err {
			medkb_store::Error::Unavailable { message } => Self::Store { message },
			medkb_store::Error::NotFound { id } => Self::NotFound { message: id.to_string() },
			medkb_store::Error::Conflict { message } => Self::Conflict { message },
		}
	}
}
