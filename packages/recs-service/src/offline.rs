use std::sync::Arc;

use recs_storage::{ItemId, RecommendationIndex, UserId};

use crate::{RecommendationsRequest, RecommendationsResponse, RecsService, resolve_count};

/// Precomputed recommendations with the default-list fallback.
#[derive(Clone, Debug)]
pub struct OfflineRecommender {
	recommendations: Arc<RecommendationIndex>,
}
impl OfflineRecommender {
	pub fn new(recommendations: Arc<RecommendationIndex>) -> Self {
		Self { recommendations }
	}

	pub fn recommend(&self, user_id: UserId, k: usize) -> Vec<ItemId> {
		self.recommendations.lookup(user_id, k)
	}
}

impl RecsService {
	pub fn recommend_offline(&self, req: RecommendationsRequest) -> RecommendationsResponse {
		let k = resolve_count(req.k, self.cfg.offline_k);

		RecommendationsResponse { recs: self.offline.recommend(req.user_id, k) }
	}
}
