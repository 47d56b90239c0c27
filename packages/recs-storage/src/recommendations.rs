use std::{
	collections::HashMap,
	path::Path,
	sync::atomic::{AtomicU64, Ordering},
};

use crate::{ItemId, Result, UserId, snapshot::Table};

pub const PERSONAL_TABLE: &str = "personal";
pub const DEFAULT_TABLE: &str = "default";
pub const USER_COLUMN: &str = "user_id";
pub const ITEM_COLUMN: &str = "item_id";
pub const RANK_COLUMN: &str = "rank";

/// Counts of offline lookups served by each list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestStats {
	pub request_personal_count: u64,
	pub request_default_count: u64,
}
impl RequestStats {
	pub fn total(&self) -> u64 {
		self.request_personal_count + self.request_default_count
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendationSource {
	Personal,
	Default,
}

/// Precomputed personal lists with a shared default list for users that have none.
///
/// The lists never change after construction; only the hit counters move.
#[derive(Debug, Default)]
pub struct RecommendationIndex {
	personal: HashMap<UserId, Vec<ItemId>>,
	default: Vec<ItemId>,
	personal_hits: AtomicU64,
	default_hits: AtomicU64,
}
impl RecommendationIndex {
	pub fn load(personal_path: &Path, default_path: &Path) -> Result<Self> {
		tracing::info!(path = %personal_path.display(), "Loading personal recommendations.");

		let personal = personal_lists(&Table::load(PERSONAL_TABLE, personal_path)?)?;

		tracing::info!(users = personal.len(), "Loaded personal recommendations.");
		tracing::info!(path = %default_path.display(), "Loading default recommendations.");

		let default = default_list(&Table::load(DEFAULT_TABLE, default_path)?)?;

		tracing::info!(items = default.len(), "Loaded default recommendations.");

		Ok(Self::new(personal, default))
	}

	pub fn from_tables(personal: &Table, default: &Table) -> Result<Self> {
		Ok(Self::new(personal_lists(personal)?, default_list(default)?))
	}

	pub fn new(personal: HashMap<UserId, Vec<ItemId>>, default: Vec<ItemId>) -> Self {
		Self {
			personal,
			default,
			personal_hits: AtomicU64::new(0),
			default_hits: AtomicU64::new(0),
		}
	}

	/// First `k` items of the user's personal list, or of the default list when the user has
	/// none. Bumps the matching counter once per call.
	pub fn lookup(&self, user_id: UserId, k: usize) -> Vec<ItemId> {
		self.lookup_with_source(user_id, k).0
	}

	pub fn lookup_with_source(
		&self,
		user_id: UserId,
		k: usize,
	) -> (Vec<ItemId>, RecommendationSource) {
		match self.personal.get(&user_id) {
			Some(items) => {
				self.personal_hits.fetch_add(1, Ordering::Relaxed);

				tracing::info!(user_id, "Serving personal recommendations.");

				(items.iter().take(k).copied().collect(), RecommendationSource::Personal)
			},
			None => {
				self.default_hits.fetch_add(1, Ordering::Relaxed);

				tracing::info!(user_id, "Serving default recommendations.");

				(self.default.iter().take(k).copied().collect(), RecommendationSource::Default)
			},
		}
	}

	pub fn stats(&self) -> RequestStats {
		RequestStats {
			request_personal_count: self.personal_hits.load(Ordering::Relaxed),
			request_default_count: self.default_hits.load(Ordering::Relaxed),
		}
	}

	pub fn has_personal(&self, user_id: UserId) -> bool {
		self.personal.contains_key(&user_id)
	}

	pub fn personal_user_count(&self) -> usize {
		self.personal.len()
	}

	pub fn default_len(&self) -> usize {
		self.default.len()
	}
}

/// Groups personal rows by user. Row order is the rank order unless a `rank` column is present,
/// in which case each list is stably sorted by ascending rank.
fn personal_lists(table: &Table) -> Result<HashMap<UserId, Vec<ItemId>>> {
	let users = table.int_column(USER_COLUMN)?;
	let items = table.int_column(ITEM_COLUMN)?;

	table.ensure_len(ITEM_COLUMN, users.len(), items.len())?;

	let ranks = if table.has_column(RANK_COLUMN) {
		let ranks = table.int_column(RANK_COLUMN)?;

		table.ensure_len(RANK_COLUMN, users.len(), ranks.len())?;

		Some(ranks)
	} else {
		None
	};
	let mut ranked: HashMap<UserId, Vec<(i64, ItemId)>> = HashMap::new();

	for (row, (user_id, item_id)) in users.into_iter().zip(items).enumerate() {
		let rank = ranks.as_ref().map(|ranks| ranks[row]).unwrap_or(row as i64);

		ranked.entry(user_id).or_default().push((rank, item_id));
	}

	Ok(ranked
		.into_iter()
		.map(|(user_id, mut entries)| {
			entries.sort_by_key(|(rank, _)| *rank);

			(user_id, entries.into_iter().map(|(_, item_id)| item_id).collect())
		})
		.collect())
}

fn default_list(table: &Table) -> Result<Vec<ItemId>> {
	table.int_column(ITEM_COLUMN)
}
