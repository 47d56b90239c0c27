pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read recommender config at {path:?}: {source}")]
	ReadConfig { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse recommender config at {path:?}: {source}")]
	ParseConfig { path: std::path::PathBuf, source: Box<toml::de::Error> },
	#[error("{message}")]
	Validation { message: String },
}
impl Error {
	pub(crate) fn validation(field: &str, reason: &str) -> Self {
		Self::Validation { message: format!("{field} {reason}") }
	}
}
