use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{PagedResult, dto::EvaluationDto, service::EvaluationService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationId {
    pub evaluation_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnicianId {
    pub technician_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route("/Get_Evaluation_By_Technician", get(paged_by_technician))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<EvaluationDto>,
) -> Result<Json<EvaluationDto>, ApiError> {
    Ok(Json(EvaluationService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<EvaluationDto>,
) -> Result<Json<EvaluationDto>, ApiError> {
    Ok(Json(EvaluationService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<EvaluationId>,
) -> Result<StatusCode, ApiError> {
    EvaluationService::delete(&state.conn, query.evaluation_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<EvaluationId>,
) -> Result<Json<EvaluationDto>, ApiError> {
    Ok(Json(
        EvaluationService::get_by_id(&state.conn, query.evaluation_id).await?,
    ))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<EvaluationDto>>, ApiError> {
    Ok(Json(EvaluationService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EvaluationDto>>, ApiError> {
    Ok(Json(EvaluationService::get_paged(&state.conn, request).await?))
}

async fn paged_by_technician(
    State(state): State<AppState>,
    Query(query): Query<TechnicianId>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EvaluationDto>>, ApiError> {
    Ok(Json(
        EvaluationService::paged_by_technician(&state.conn, query.technician_id, request).await?,
    ))
}
