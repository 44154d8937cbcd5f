use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{PagedResult, dto::TransferRequestDto, service::TransferRequestService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequestId {
    pub transfer_request_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route(
            "/requests/arrival-department/{department_id}",
            get(paged_by_arrival_department),
        )
        .route("/Pending", get(pending_paged))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<TransferRequestDto>,
) -> Result<Json<TransferRequestDto>, ApiError> {
    Ok(Json(TransferRequestService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<TransferRequestDto>,
) -> Result<Json<TransferRequestDto>, ApiError> {
    Ok(Json(TransferRequestService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<TransferRequestId>,
) -> Result<StatusCode, ApiError> {
    TransferRequestService::delete(&state.conn, query.transfer_request_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<TransferRequestId>,
) -> Result<Json<TransferRequestDto>, ApiError> {
    Ok(Json(
        TransferRequestService::get_by_id(&state.conn, query.transfer_request_id).await?,
    ))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<TransferRequestDto>>, ApiError> {
    Ok(Json(TransferRequestService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<TransferRequestDto>>, ApiError> {
    Ok(Json(
        TransferRequestService::get_paged(&state.conn, request).await?,
    ))
}

async fn paged_by_arrival_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<TransferRequestDto>>, ApiError> {
    Ok(Json(
        TransferRequestService::paged_by_arrival_department(&state.conn, department_id, request)
            .await?,
    ))
}

async fn pending_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<TransferRequestDto>>, ApiError> {
    Ok(Json(
        TransferRequestService::pending_paged(&state.conn, request).await?,
    ))
}
