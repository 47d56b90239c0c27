use serde::{Deserialize, Serialize};

use recs_storage::ItemId;

use crate::{RecsService, resolve_count};

#[derive(Debug, Deserialize)]
pub struct SimilarItemsRequest {
	pub item_id: ItemId,
	pub k: Option<i64>,
}

/// Column-wise neighbors: `item_ids[i]` scored `scores[i]`, best first.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SimilarItemsResponse {
	pub item_ids: Vec<ItemId>,
	pub scores: Vec<f64>,
}

impl RecsService {
	pub fn similar_items(&self, req: SimilarItemsRequest) -> SimilarItemsResponse {
		let k = resolve_count(req.k, self.cfg.similar_k);
		let (item_ids, scores) = self
			.stores
			.similar
			.lookup(req.item_id, k)
			.iter()
			.map(|item| (item.item_id, item.score))
			.unzip();

		SimilarItemsResponse { item_ids, scores }
	}
}
