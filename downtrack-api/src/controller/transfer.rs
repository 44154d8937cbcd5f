use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{PagedResult, dto::TransferDto, service::TransferService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferId {
    pub transfer_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(register))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
}

/// Registering a transfer is how it gets created
async fn register(
    State(state): State<AppState>,
    Json(dto): Json<TransferDto>,
) -> Result<Json<TransferDto>, ApiError> {
    Ok(Json(TransferService::register(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<TransferDto>,
) -> Result<Json<TransferDto>, ApiError> {
    Ok(Json(TransferService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<TransferId>,
) -> Result<StatusCode, ApiError> {
    TransferService::delete(&state.conn, query.transfer_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<TransferId>,
) -> Result<Json<TransferDto>, ApiError> {
    Ok(Json(TransferService::get_by_id(&state.conn, query.transfer_id).await?))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<TransferDto>>, ApiError> {
    Ok(Json(TransferService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<TransferDto>>, ApiError> {
    Ok(Json(TransferService::get_paged(&state.conn, request).await?))
}
