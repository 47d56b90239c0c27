mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Events, Recommendations, Service, Snapshots};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	parse(path, &raw)
}

pub fn parse(path: &Path, raw: &str) -> Result<Config> {
	let mut cfg: Config = toml::from_str(raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: Box::new(err) })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.is_empty() {
		return Err(Error::validation("service.http_bind", "must be non-empty."));
	}
	if cfg.events.max_events_per_user == 0 {
		return Err(Error::validation("events.max_events_per_user", "must be greater than zero."));
	}

	for (field, path) in [
		("snapshots.similar", &cfg.snapshots.similar),
		("snapshots.personal", &cfg.snapshots.personal),
		("snapshots.default", &cfg.snapshots.default),
	] {
		if path.as_os_str().is_empty() {
			return Err(Error::validation(field, "must be non-empty."));
		}
	}

	let recs = &cfg.recommendations;

	for (field, value) in [
		("recommendations.blend_k", recs.blend_k),
		("recommendations.online_k", recs.online_k),
		("recommendations.offline_k", recs.offline_k),
		("recommendations.num_events", recs.num_events),
		("recommendations.history_k", recs.history_k),
		("recommendations.similar_k", recs.similar_k),
	] {
		if value == 0 {
			return Err(Error::validation(field, "must be greater than zero."));
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	cfg.service.http_bind = cfg.service.http_bind.trim().to_string();
	cfg.service.log_level = cfg.service.log_level.trim().to_string();

	if cfg.service.log_level.is_empty() {
		cfg.service.log_level = "info".to_string();
	}

	for path in
		[&mut cfg.snapshots.similar, &mut cfg.snapshots.personal, &mut cfg.snapshots.default]
	{
		if let Some(raw) = path.to_str() {
			let trimmed = raw.trim();

			if trimmed.len() != raw.len() {
				*path = trimmed.into();
			}
		}
	}
}
