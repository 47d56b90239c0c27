use serde::{Deserialize, Serialize};

use recs_storage::RequestStats;

use crate::RecsService;

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
	pub request_personal_count: u64,
	pub request_default_count: u64,
}
impl From<RequestStats> for StatsResponse {
	fn from(stats: RequestStats) -> Self {
		Self {
			request_personal_count: stats.request_personal_count,
			request_default_count: stats.request_default_count,
		}
	}
}

impl RecsService {
	pub fn stats(&self) -> StatsResponse {
		self.stores.recommendations.stats().into()
	}
}
