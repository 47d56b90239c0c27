use std::sync::Arc;

use recs_service::RecsService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<RecsService>,
}
impl AppState {
	/// Loads all snapshots before the server accepts traffic.
	pub async fn new(config: &recs_config::Config) -> color_eyre::Result<Self> {
		let config = config.clone();
		let service = tokio::task::spawn_blocking(move || RecsService::load(&config)).await??;

		Ok(Self::from_service(service))
	}

	pub fn from_service(service: RecsService) -> Self {
		Self { service: Arc::new(service) }
	}
}
