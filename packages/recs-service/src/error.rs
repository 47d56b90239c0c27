pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Snapshot load failed: {0}")]
	Load(#[from] recs_storage::Error),
}
