use axum::{
	Json, Router,
	extract::State,
	routing::{get, post},
};
use serde::Serialize;

use recs_service::{
	GetEventsRequest, GetEventsResponse, OnlineRecommendationsRequest, PutEventRequest,
	PutEventResponse, RecommendationsRequest, RecommendationsResponse, SimilarItemsRequest,
	SimilarItemsResponse, StatsResponse,
};

use crate::state::AppState;

#[derive(Debug, Serialize)]
struct HealthBody {
	status: &'static str,
}

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/healthy", get(healthy))
		.route("/stats", get(stats))
		.route("/events/put", post(put_event))
		.route("/events/get", post(get_events))
		.route("/similar_items", post(similar_items))
		.route("/recommendations_offline", post(recommendations_offline))
		.route("/recommendations_online", post(recommendations_online))
		.route("/recommendations", post(recommendations))
		.with_state(state)
}

async fn healthy() -> Json<HealthBody> {
	Json(HealthBody { status: "healthy" })
}

async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
	Json(state.service.stats())
}

async fn put_event(
	State(state): State<AppState>,
	Json(payload): Json<PutEventRequest>,
) -> Json<PutEventResponse> {
	Json(state.service.put_event(payload))
}

async fn get_events(
	State(state): State<AppState>,
	Json(payload): Json<GetEventsRequest>,
) -> Json<GetEventsResponse> {
	Json(state.service.get_events(payload))
}

async fn similar_items(
	State(state): State<AppState>,
	Json(payload): Json<SimilarItemsRequest>,
) -> Json<SimilarItemsResponse> {
	Json(state.service.similar_items(payload))
}

async fn recommendations_offline(
	State(state): State<AppState>,
	Json(payload): Json<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
	Json(state.service.recommend_offline(payload))
}

async fn recommendations_online(
	State(state): State<AppState>,
	Json(payload): Json<OnlineRecommendationsRequest>,
) -> Json<RecommendationsResponse> {
	Json(state.service.recommend_online(payload))
}

async fn recommendations(
	State(state): State<AppState>,
	Json(payload): Json<RecommendationsRequest>,
) -> Json<RecommendationsResponse> {
	Json(state.service.recommend(payload))
}
