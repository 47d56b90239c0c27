//! Columnar snapshot tables.
//!
//! A snapshot is a JSON object mapping each column name to an array of cell values. All
//! columns a reader asks for must be present and share one length; unknown columns are ignored.

use std::{fs, path::Path};

use serde_json::{Map, Value};

use crate::{Error, Result};

#[derive(Debug)]
pub struct Table {
	name: &'static str,
	columns: Map<String, Value>,
}
impl Table {
	pub fn load(name: &'static str, path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadSnapshot { path: path.to_path_buf(), source: err })?;

		Self::parse(name, &raw)
	}

	pub fn parse(name: &'static str, raw: &str) -> Result<Self> {
		let columns: Map<String, Value> = serde_json::from_str(raw)
			.map_err(|err| Error::ParseSnapshot { table: name, source: err })?;

		Ok(Self { name, columns })
	}

	pub fn has_column(&self, column: &str) -> bool {
		self.columns.contains_key(column)
	}

	pub fn int_column(&self, column: &'static str) -> Result<Vec<i64>> {
		self.cells(column)?
			.iter()
			.enumerate()
			.map(|(row, cell)| {
				cell.as_i64().ok_or_else(|| Error::InvalidValue {
					table: self.name,
					column,
					row,
					message: format!("expected an integer, found {cell}"),
				})
			})
			.collect()
	}

	pub fn float_column(&self, column: &'static str) -> Result<Vec<f64>> {
		self.cells(column)?
			.iter()
			.enumerate()
			.map(|(row, cell)| {
				cell.as_f64().ok_or_else(|| Error::InvalidValue {
					table: self.name,
					column,
					row,
					message: format!("expected a number, found {cell}"),
				})
			})
			.collect()
	}

	/// Fails unless `actual` matches the row count established by the first column read.
	pub fn ensure_len(&self, column: &'static str, expected: usize, actual: usize) -> Result<()> {
		if expected != actual {
			return Err(Error::ColumnLength { table: self.name, column, expected, actual });
		}

		Ok(())
	}

	fn cells(&self, column: &'static str) -> Result<&Vec<Value>> {
		let value = self
			.columns
			.get(column)
			.ok_or(Error::MissingColumn { table: self.name, column })?;

		value.as_array().ok_or_else(|| Error::InvalidValue {
			table: self.name,
			column,
			row: 0,
			message: "column must be an array".to_string(),
		})
	}
}
