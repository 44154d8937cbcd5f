use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{PagedResult, dto::DepartmentDto, service::DepartmentService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentId {
    pub department_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route("/departments/section/{section_id}", get(paged_by_section))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<DepartmentDto>,
) -> Result<Json<DepartmentDto>, ApiError> {
    Ok(Json(DepartmentService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<DepartmentDto>,
) -> Result<Json<DepartmentDto>, ApiError> {
    Ok(Json(DepartmentService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<DepartmentId>,
) -> Result<StatusCode, ApiError> {
    DepartmentService::delete(&state.conn, query.department_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<DepartmentId>,
) -> Result<Json<DepartmentDto>, ApiError> {
    Ok(Json(
        DepartmentService::get_by_id(&state.conn, query.department_id).await?,
    ))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<DepartmentDto>>, ApiError> {
    Ok(Json(DepartmentService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<DepartmentDto>>, ApiError> {
    Ok(Json(DepartmentService::get_paged(&state.conn, request).await?))
}

async fn paged_by_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<DepartmentDto>>, ApiError> {
    Ok(Json(
        DepartmentService::paged_by_section(&state.conn, section_id, request).await?,
    ))
}
