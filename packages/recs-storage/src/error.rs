use std::path::PathBuf;

/// Failures while loading a snapshot. Any of these aborts the whole load.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read snapshot at {path:?}: {source}")]
	ReadSnapshot { path: PathBuf, source: std::io::Error },
	#[error("Failed to parse {table} snapshot: {source}")]
	ParseSnapshot { table: &'static str, source: serde_json::Error },
	#[error("Snapshot {table} is missing required column {column}.")]
	MissingColumn { table: &'static str, column: &'static str },
	#[error("Snapshot {table} has an invalid value in column {column} at row {row}: {message}")]
	InvalidValue { table: &'static str, column: &'static str, row: usize, message: String },
	#[error("Snapshot {table} column {column} has {actual} rows, expected {expected}.")]
	ColumnLength { table: &'static str, column: &'static str, expected: usize, actual: usize },
}
