pub mod events;
pub mod recommendations;
pub mod similarity;
pub mod snapshot;

mod error;

pub use error::Error;
pub use events::EventStore;
pub use recommendations::{RecommendationIndex, RecommendationSource, RequestStats};
pub use similarity::{SimilarItem, SimilarityIndex};

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Opaque user key.
pub type UserId = i64;
/// Opaque item key.
pub type ItemId = i64;
