use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{
    PagedResult,
    dto::{DepartmentDto, SectionDto},
    service::SectionService,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionId {
    pub section_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route("/departments/{section_id}", get(departments_of))
        .route("/sections/section-manager/{section_manager_id}", get(paged_by_manager))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<SectionDto>,
) -> Result<Json<SectionDto>, ApiError> {
    Ok(Json(SectionService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<SectionDto>,
) -> Result<Json<SectionDto>, ApiError> {
    Ok(Json(SectionService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<SectionId>,
) -> Result<StatusCode, ApiError> {
    SectionService::delete(&state.conn, query.section_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<SectionId>,
) -> Result<Json<SectionDto>, ApiError> {
    Ok(Json(SectionService::get_by_id(&state.conn, query.section_id).await?))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<SectionDto>>, ApiError> {
    Ok(Json(SectionService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<SectionDto>>, ApiError> {
    Ok(Json(SectionService::get_paged(&state.conn, request).await?))
}

async fn departments_of(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
) -> Result<Json<Vec<DepartmentDto>>, ApiError> {
    Ok(Json(SectionService::departments_of(&state.conn, section_id).await?))
}

async fn paged_by_manager(
    State(state): State<AppState>,
    Path(section_manager_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<SectionDto>>, ApiError> {
    Ok(Json(
        SectionService::paged_by_manager(&state.conn, section_manager_id, request).await?,
    ))
}
