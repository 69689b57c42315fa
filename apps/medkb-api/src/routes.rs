use axum::{
	Json, Router,
	extract::{Path, Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::state::AppState;
use medkb_domain::{Category, KnowledgeEntry};
use medkb_service::{
	CategoryEntry, CategorySummary, Error as ServiceError, KnowledgeStats, PopularKeyword,
	RebuildReport, SearchHistoryRecord, SearchRequest, SearchResponse,
};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search", post(search))
		.route("/v1/search/history/{session_id}", get(search_history))
		.route("/v1/categories", get(list_categories))
		.route("/v1/categories/{id}/entries", get(browse_category))
		.route("/v1/keywords/popular", get(popular_keywords))
		.route("/v1/stats", get(stats))
		.with_state(state)
}

pub fn admin_router(state: AppState) -> Router {
	Router::new()
		.route("/v1/admin/entries", post(upsert_entry))
		.route("/v1/admin/entries/{id}", delete(delete_entry))
		.route("/v1/admin/categories", post(upsert_category))
		.route("/v1/admin/categories/{id}", delete(delete_category))
		.route("/v1/admin/rebuild", post(rebuild))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload)?;

	Ok(Json(response))
}

async fn search_history(
	State(state): State<AppState>,
	Path(session_id): Path<String>,
) -> Json<Vec<SearchHistoryRecord>> {
	Json(state.service.history.for_session(&session_id))
}

async fn list_categories(
	State(state): State<AppState>,
) -> Result<Json<Vec<CategorySummary>>, ApiError> {
	let categories = state.service.list_categories()?;

	Ok(Json(categories))
}

async fn browse_category(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<Json<Vec<CategoryEntry>>, ApiError> {
	let entries = state.service.browse_category(id)?;

	Ok(Json(entries))
}

#[derive(Debug, Deserialize)]
struct KeywordParams {
	#[serde(default = "default_keyword_limit")]
	limit: u32,
}

fn default_keyword_limit() -> u32 {
	20
}

async fn popular_keywords(
	State(state): State<AppState>,
	Query(params): Query<KeywordParams>,
) -> Result<Json<Vec<PopularKeyword>>, ApiError> {
	let keywords = state.service.popular_keywords(params.limit)?;

	Ok(Json(keywords))
}

async fn stats(State(state): State<AppState>) -> Result<Json<KnowledgeStats>, ApiError> {
	let stats = state.service.stats()?;

	Ok(Json(stats))
}

#[derive(Debug, Deserialize)]
struct UpsertEntryRequest {
	entry_id: Option<Uuid>,
	title: String,
	category_id: Uuid,
	#[serde(default)]
	keywords: Vec<String>,
	body: String,
	source: Option<String>,
}

#[derive(Debug, Serialize)]
struct UpsertEntryResponse {
	entry_id: Uuid,
}

async fn upsert_entry(
	State(state): State<AppState>,
	Json(payload): Json<UpsertEntryRequest>,
) -> Result<Json<UpsertEntryResponse>, ApiError> {
	let entry_id = payload.entry_id.unwrap_or_else(Uuid::new_v4);
	let entry = KnowledgeEntry {
		entry_id,
		title: payload.title,
		category_id: payload.category_id,
		keywords: payload.keywords,
		body: payload.body,
		source: payload.source,
		updated_at: time::OffsetDateTime::now_utc(),
	};

	state.service.upsert_entry(entry).await?;

	Ok(Json(UpsertEntryResponse { entry_id }))
}

async fn delete_entry(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_entry(id).await?;

	Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
struct UpsertCategoryRequest {
	category_id: Option<Uuid>,
	name: String,
	#[serde(default = "default_category_active")]
	active: bool,
}

fn default_category_active() -> bool {
	true
}

#[derive(Debug, Serialize)]
struct UpsertCategoryResponse {
	category_id: Uuid,
}

async fn upsert_category(
	State(state): State<AppState>,
	Json(payload): Json<UpsertCategoryRequest>,
) -> Result<Json<UpsertCategoryResponse>, ApiError> {
	let category_id = payload.category_id.unwrap_or_else(Uuid::new_v4);
	let category = Category { category_id, name: payload.name, active: payload.active };

	state.service.upsert_category(category).await?;

	Ok(Json(UpsertCategoryResponse { category_id }))
}

async fn delete_category(
	State(state): State<AppState>,
	Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
	state.service.delete_category(id).await?;

	Ok(StatusCode::NO_CONTENT)
}

async fn rebuild(State(state): State<AppState>) -> Result<Json<RebuildReport>, ApiError> {
	let report = state.service.rebuild().await?;

	Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: &'static str,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		let (status, error_code) = match &err {
			ServiceError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation"),
			ServiceError::IndexUnavailable => (StatusCode::SERVICE_UNAVAILABLE, "index_unavailable"),
			ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
			ServiceError::Conflict { .. } => (StatusCode::CONFLICT, "conflict"),
			ServiceError::Store { .. } => (StatusCode::BAD_GATEWAY, "store_unavailable"),
		};

		Self { status, error_code, message: err.to_string() }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body = ErrorBody { error_code: self.error_code.to_string(), message: self.message };

		(self.status, Json(body)).into_response()
	}
}
