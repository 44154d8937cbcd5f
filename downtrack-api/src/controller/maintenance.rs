use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{PagedResult, dto::DoneMaintenanceDto, service::MaintenanceService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceId {
    pub done_maintenance_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route("/maintenances/technician/{technician_id}", get(paged_by_technician))
        .route("/maintenances/equipment/{equipment_id}", get(paged_by_equipment))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<DoneMaintenanceDto>,
) -> Result<Json<DoneMaintenanceDto>, ApiError> {
    Ok(Json(MaintenanceService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<DoneMaintenanceDto>,
) -> Result<Json<DoneMaintenanceDto>, ApiError> {
    Ok(Json(MaintenanceService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceId>,
) -> Result<StatusCode, ApiError> {
    MaintenanceService::delete(&state.conn, query.done_maintenance_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<MaintenanceId>,
) -> Result<Json<DoneMaintenanceDto>, ApiError> {
    Ok(Json(
        MaintenanceService::get_by_id(&state.conn, query.done_maintenance_id).await?,
    ))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<DoneMaintenanceDto>>, ApiError> {
    Ok(Json(MaintenanceService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<DoneMaintenanceDto>>, ApiError> {
    Ok(Json(MaintenanceService::get_paged(&state.conn, request).await?))
}

async fn paged_by_technician(
    State(state): State<AppState>,
    Path(technician_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<DoneMaintenanceDto>>, ApiError> {
    Ok(Json(
        MaintenanceService::paged_by_technician(&state.conn, technician_id, request).await?,
    ))
}

async fn paged_by_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<DoneMaintenanceDto>>, ApiError> {
    Ok(Json(
        MaintenanceService::paged_by_equipment(&state.conn, equipment_id, request).await?,
    ))
}
