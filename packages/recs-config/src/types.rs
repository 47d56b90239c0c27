use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	#[serde(default)]
	pub events: Events,
	pub snapshots: Snapshots,
	#[serde(default)]
	pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Events {
	/// Cap on the online history kept per user. The oldest entries are evicted first.
	pub max_events_per_user: usize,
}
impl Default for Events {
	fn default() -> Self {
		Self { max_events_per_user: 10 }
	}
}

/// Locations of the precomputed columnar tables loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshots {
	/// Columns: `item_id_1`, `item_id_2`, `score`.
	pub similar: PathBuf,
	/// Columns: `user_id`, `item_id`, optional `rank`.
	pub personal: PathBuf,
	/// Columns: `item_id`.
	pub default: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Recommendations {
	pub blend_k: usize,
	pub online_k: usize,
	pub offline_k: usize,
	/// How many recent events seed the online recommender.
	pub num_events: usize,
	pub history_k: usize,
	pub similar_k: usize,
}
impl Default for Recommendations {
	fn default() -> Self {
		Self {
			blend_k: 100,
			online_k: 5,
			offline_k: 5,
			num_events: 3,
			history_k: 5,
			similar_k: 10,
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}
