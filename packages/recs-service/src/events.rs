use serde::{Deserialize, Serialize};

use recs_storage::{ItemId, UserId};

use crate::{RecsService, resolve_count};

#[derive(Debug, Deserialize)]
pub struct PutEventRequest {
	pub user_id: UserId,
	pub item_id: ItemId,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutEventResponse {
	pub result: String,
}

#[derive(Debug, Deserialize)]
pub struct GetEventsRequest {
	pub user_id: UserId,
	pub k: Option<i64>,
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetEventsResponse {
	pub events: Vec<ItemId>,
}

impl RecsService {
	pub fn put_event(&self, req: PutEventRequest) -> PutEventResponse {
		self.stores.events.put(req.user_id, req.item_id);

		tracing::debug!(user_id = req.user_id, item_id = req.item_id, "Recorded online event.");

		PutEventResponse { result: "OK".to_string() }
	}

	pub fn get_events(&self, req: GetEventsRequest) -> GetEventsResponse {
		let k = resolve_count(req.k, self.cfg.history_k);

		GetEventsResponse { events: self.stores.events.get(req.user_id, k) }
	}
}
