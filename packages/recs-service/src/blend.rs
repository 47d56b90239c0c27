use recs_storage::{ItemId, UserId};

use crate::{
	OfflineRecommender, OnlineRecommender, RecommendationsRequest, RecommendationsResponse,
	RecsService, dedup_ids, resolve_count,
};

/// Merges online and offline recommendations into one ranked list.
#[derive(Clone, Debug)]
pub struct BlendingOrchestrator {
	online: OnlineRecommender,
	offline: OfflineRecommender,
	num_events: usize,
}
impl BlendingOrchestrator {
	pub fn new(online: OnlineRecommender, offline: OfflineRecommender, num_events: usize) -> Self {
		Self { online, offline, num_events }
	}

	pub fn recommend(&self, user_id: UserId, k: usize) -> Vec<ItemId> {
		let online = self.online.recommend(user_id, k, self.num_events);
		let offline = self.offline.recommend(user_id, k);

		tracing::debug!(
			user_id,
			online = online.len(),
			offline = offline.len(),
			"Blending recommendations."
		);

		blend(online, offline, k)
	}
}

/// Offline alone when there is no online signal, otherwise the deduplicated interleave.
pub fn blend(online: Vec<ItemId>, mut offline: Vec<ItemId>, k: usize) -> Vec<ItemId> {
	if online.is_empty() {
		offline.truncate(k);

		return offline;
	}

	let mut blended = dedup_ids(interleave(&online, &offline));

	blended.truncate(k);

	blended
}

/// Pairs the lists rank by rank, online first. Whatever the longer list has past the shorter
/// one's length is dropped.
pub fn interleave(online: &[ItemId], offline: &[ItemId]) -> Vec<ItemId> {
	online.iter().zip(offline).flat_map(|(on, off)| [*on, *off]).collect()
}

impl RecsService {
	pub fn recommend(&self, req: RecommendationsRequest) -> RecommendationsResponse {
		let k = resolve_count(req.k, self.cfg.blend_k);

		RecommendationsResponse { recs: self.blender.recommend(req.user_id, k) }
	}
}

#[cfg(test)]
mod tests {
	use super::{blend, interleave};

	#[test]
	fn interleave_pairs_by_rank_and_drops_remainder() {
		assert_eq!(interleave(&[1, 2, 3], &[4, 5]), vec![1, 4, 2, 5]);
		assert_eq!(interleave(&[1], &[4, 5, 6]), vec![1, 4]);
		assert!(interleave(&[1, 2], &[]).is_empty());
	}

	#[test]
	fn blend_dedups_interleaved_sequence() {
		// A=1, B=2, C=3, D=4, E=5.
		assert_eq!(interleave(&[1, 2, 3], &[2, 4, 5]), vec![1, 2, 2, 4, 3, 5]);
		assert_eq!(blend(vec![1, 2, 3], vec![2, 4, 5], 4), vec![1, 2, 4, 3]);
	}

	#[test]
	fn blend_without_online_returns_offline_prefix() {
		assert_eq!(blend(Vec::new(), vec![9, 8, 7], 2), vec![9, 8]);
		assert_eq!(blend(Vec::new(), vec![9, 8, 7], 10), vec![9, 8, 7]);
	}

	#[test]
	fn blend_with_empty_offline_is_empty() {
		assert!(blend(vec![1, 2], Vec::new(), 5).is_empty());
	}

	#[test]
	fn blend_never_exceeds_k() {
		let online: Vec<i64> = (0..20).collect();
		let offline: Vec<i64> = (100..120).collect();

		for k in 0..30 {
			assert!(blend(online.clone(), offline.clone(), k).len() <= k);
		}
	}
}
