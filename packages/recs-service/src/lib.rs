pub mod blend;
pub mod events;
pub mod offline;
pub mod online;
pub mod similar;
pub mod stats;

mod error;

pub use blend::BlendingOrchestrator;
pub use error::{Error, Result};
pub use events::{GetEventsRequest, GetEventsResponse, PutEventRequest, PutEventResponse};
pub use offline::OfflineRecommender;
pub use online::{OnlineRecommendationsRequest, OnlineRecommender};
pub use similar::{SimilarItemsRequest, SimilarItemsResponse};
pub use stats::StatsResponse;

use std::{collections::HashSet, sync::Arc};

use serde::{Deserialize, Serialize};

use recs_config::{Config, Recommendations};
use recs_storage::{EventStore, ItemId, RecommendationIndex, SimilarityIndex, UserId};

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
	pub user_id: UserId,
	pub k: Option<i64>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
	pub recs: Vec<ItemId>,
}

/// The lookup stores a service runs against.
#[derive(Clone, Debug)]
pub struct Stores {
	pub events: Arc<EventStore>,
	pub similar: Arc<SimilarityIndex>,
	pub recommendations: Arc<RecommendationIndex>,
}

pub struct RecsService {
	pub cfg: Recommendations,
	pub stores: Stores,
	pub online: OnlineRecommender,
	pub offline: OfflineRecommender,
	pub blender: BlendingOrchestrator,
}
impl RecsService {
	/// Loads every snapshot named in `cfg`. Blocks on file I/O and fails on the first bad table.
	pub fn load(cfg: &Config) -> Result<Self> {
		let similar = SimilarityIndex::load(&cfg.snapshots.similar)?;
		let recommendations =
			RecommendationIndex::load(&cfg.snapshots.personal, &cfg.snapshots.default)?;
		let stores = Stores {
			events: Arc::new(EventStore::new(cfg.events.max_events_per_user)),
			similar: Arc::new(similar),
			recommendations: Arc::new(recommendations),
		};

		Ok(Self::new(cfg.recommendations.clone(), stores))
	}

	pub fn new(cfg: Recommendations, stores: Stores) -> Self {
		let online = OnlineRecommender::new(stores.events.clone(), stores.similar.clone());
		let offline = OfflineRecommender::new(stores.recommendations.clone());
		let blender = BlendingOrchestrator::new(online.clone(), offline.clone(), cfg.num_events);

		Self { cfg, stores, online, offline, blender }
	}
}

/// Resolves a wire-level count. Missing means `default`; zero or negative means nothing.
pub fn resolve_count(requested: Option<i64>, default: usize) -> usize {
	match requested {
		Some(value) => usize::try_from(value).unwrap_or(0),
		None => default,
	}
}

/// Drops repeated ids, keeping the first occurrence in encounter order.
pub fn dedup_ids<I>(ids: I) -> Vec<ItemId>
where
	I: IntoIterator<Item = ItemId>,
{
	let mut seen = HashSet::new();

	ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
