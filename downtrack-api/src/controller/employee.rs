use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{
    PagedResult, dto::EmployeeDto, entity::sea_orm_active_enums::UserRole,
    service::EmployeeService,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeId {
    pub employee_id: i32,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route("/employees/role/{role}", get(paged_by_role))
        .route("/Technicians", get(technicians_paged))
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<EmployeeDto>,
) -> Result<Json<EmployeeDto>, ApiError> {
    Ok(Json(EmployeeService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<EmployeeDto>,
) -> Result<Json<EmployeeDto>, ApiError> {
    Ok(Json(EmployeeService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<EmployeeId>,
) -> Result<StatusCode, ApiError> {
    EmployeeService::delete(&state.conn, query.employee_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<EmployeeId>,
) -> Result<Json<EmployeeDto>, ApiError> {
    Ok(Json(EmployeeService::get_by_id(&state.conn, query.employee_id).await?))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    Ok(Json(EmployeeService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EmployeeDto>>, ApiError> {
    Ok(Json(EmployeeService::get_paged(&state.conn, request).await?))
}

async fn paged_by_role(
    State(state): State<AppState>,
    Path(role): Path<UserRole>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EmployeeDto>>, ApiError> {
    Ok(Json(
        EmployeeService::paged_by_role(&state.conn, role, request).await?,
    ))
}

async fn technicians_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EmployeeDto>>, ApiError> {
    Ok(Json(
        EmployeeService::technicians_paged(&state.conn, request).await?,
    ))
}
