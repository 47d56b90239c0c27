use std::sync::Arc;

use serde::Deserialize;

use recs_storage::{EventStore, ItemId, SimilarItem, SimilarityIndex, UserId};

use crate::{RecommendationsResponse, RecsService, dedup_ids, resolve_count};

#[derive(Debug, Deserialize)]
pub struct OnlineRecommendationsRequest {
	pub user_id: UserId,
	pub k: Option<i64>,
	pub num_events: Option<i64>,
}

/// Neighbors of the user's most recent events, merged into one ranked list.
#[derive(Clone, Debug)]
pub struct OnlineRecommender {
	events: Arc<EventStore>,
	similar: Arc<SimilarityIndex>,
}
impl OnlineRecommender {
	pub fn new(events: Arc<EventStore>, similar: Arc<SimilarityIndex>) -> Self {
		Self { events, similar }
	}

	/// Returns an empty list when the user has no online history.
	pub fn recommend(&self, user_id: UserId, k: usize, num_events: usize) -> Vec<ItemId> {
		if k == 0 {
			return Vec::new();
		}

		let recent = self.events.get(user_id, num_events);
		let mut candidates: Vec<SimilarItem> = Vec::new();

		for item_id in &recent {
			candidates.extend_from_slice(self.similar.lookup(*item_id, k));
		}

		// Stable, so on equal scores the earlier-queried event wins.
		candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

		let mut recs = dedup_ids(candidates.into_iter().map(|candidate| candidate.item_id));

		recs.truncate(k);

		tracing::debug!(
			user_id,
			events = recent.len(),
			recs = recs.len(),
			"Built online recommendations."
		);

		recs
	}
}

impl RecsService {
	pub fn recommend_online(&self, req: OnlineRecommendationsRequest) -> RecommendationsResponse {
		let k = resolve_count(req.k, self.cfg.online_k);
		let num_events = resolve_count(req.num_events, self.cfg.num_events);

		RecommendationsResponse { recs: self.online.recommend(req.user_id, k, num_events) }
	}
}
