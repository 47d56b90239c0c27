use std::{collections::HashMap, path::Path};

use crate::{Error, ItemId, Result, snapshot::Table};

pub const TABLE: &str = "similar";
pub const ANCHOR_COLUMN: &str = "item_id_1";
pub const CANDIDATE_COLUMN: &str = "item_id_2";
pub const SCORE_COLUMN: &str = "score";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarItem {
	pub item_id: ItemId,
	pub score: f64,
}

/// Read-only item-to-item neighbor table. Candidates of every anchor are kept in descending
/// score order; ties keep snapshot row order.
#[derive(Debug, Default)]
pub struct SimilarityIndex {
	by_anchor: HashMap<ItemId, Vec<SimilarItem>>,
}
impl SimilarityIndex {
	pub fn load(path: &Path) -> Result<Self> {
		tracing::info!(path = %path.display(), "Loading similarity snapshot.");

		let index = Self::from_table(&Table::load(TABLE, path)?)?;

		tracing::info!(anchors = index.len(), "Loaded similarity snapshot.");

		Ok(index)
	}

	pub fn from_table(table: &Table) -> Result<Self> {
		let anchors = table.int_column(ANCHOR_COLUMN)?;
		let candidates = table.int_column(CANDIDATE_COLUMN)?;
		let scores = table.float_column(SCORE_COLUMN)?;

		table.ensure_len(CANDIDATE_COLUMN, anchors.len(), candidates.len())?;
		table.ensure_len(SCORE_COLUMN, anchors.len(), scores.len())?;

		Self::from_rows(
			anchors.into_iter().zip(candidates).zip(scores).map(|((a, c), s)| (a, c, s)),
		)
	}

	/// Builds the index from `(anchor, candidate, score)` rows. Scores must be finite.
	pub fn from_rows<I>(rows: I) -> Result<Self>
	where
		I: IntoIterator<Item = (ItemId, ItemId, f64)>,
	{
		let mut by_anchor: HashMap<ItemId, Vec<SimilarItem>> = HashMap::new();

		for (row, (anchor, item_id, score)) in rows.into_iter().enumerate() {
			if !score.is_finite() {
				return Err(Error::InvalidValue {
					table: TABLE,
					column: SCORE_COLUMN,
					row,
					message: format!("score must be finite, found {score}"),
				});
			}

			by_anchor.entry(anchor).or_default().push(SimilarItem { item_id, score });
		}

		for candidates in by_anchor.values_mut() {
			candidates.sort_by(|a, b| b.score.total_cmp(&a.score));
		}

		Ok(Self { by_anchor })
	}

	/// Up to `k` neighbors of `item_id`, best first. Unknown items yield an empty slice.
	pub fn lookup(&self, item_id: ItemId, k: usize) -> &[SimilarItem] {
		match self.by_anchor.get(&item_id) {
			Some(candidates) => &candidates[..k.min(candidates.len())],
			None => {
				tracing::debug!(item_id, "No similar items for anchor.");

				&[]
			},
		}
	}

	pub fn len(&self) -> usize {
		self.by_anchor.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_anchor.is_empty()
	}
}
