use std::collections::VecDeque;

use dashmap::DashMap;

use crate::{ItemId, UserId};

pub const DEFAULT_MAX_EVENTS_PER_USER: usize = 10;

/// Bounded online history per user, most recent first.
///
/// Each user's sequence lives in its own map entry, so writers for different users only
/// contend when they hash to the same shard. A `put` holds the entry guard for the whole
/// prepend-and-truncate, which keeps the cap intact under concurrent writers for one user.
#[derive(Debug)]
pub struct EventStore {
	events: DashMap<UserId, VecDeque<ItemId>>,
	max_events_per_user: usize,
}
impl EventStore {
	pub fn new(max_events_per_user: usize) -> Self {
		Self { events: DashMap::new(), max_events_per_user }
	}

	pub fn max_events_per_user(&self) -> usize {
		self.max_events_per_user
	}

	/// Records `item_id` as the newest event of `user_id`. Duplicates are kept.
	pub fn put(&self, user_id: UserId, item_id: ItemId) {
		let mut history = self.events.entry(user_id).or_default();

		history.push_front(item_id);
		history.truncate(self.max_events_per_user);
	}

	/// Returns up to `k` of the newest events, or nothing for an unknown user.
	pub fn get(&self, user_id: UserId, k: usize) -> Vec<ItemId> {
		if k == 0 {
			return Vec::new();
		}

		self.events
			.get(&user_id)
			.map(|history| history.iter().take(k).copied().collect())
			.unwrap_or_default()
	}

	pub fn user_count(&self) -> usize {
		self.events.len()
	}
}
impl Default for EventStore {
	fn default() -> Self {
		Self::new(DEFAULT_MAX_EVENTS_PER_USER)
	}
}
