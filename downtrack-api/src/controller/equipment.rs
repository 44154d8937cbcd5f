use crate::{AppState, error::ApiError, extract::Paged};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use downtrack::{PagedResult, dto::EquipmentDto, service::EquipmentService};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentId {
    pub equipment_id: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentId {
    pub department_id: i32,
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    pub name: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/POST", post(create))
        .route("/PUT", put(update))
        .route("/DELETE", delete(remove))
        .route("/GET", get(get_by_id))
        .route("/GET_ALL", get(list))
        .route("/GetPaged", get(get_paged))
        .route("/equipments/department/{department_id}", get(paged_by_department))
        .route("/equipments/section/{section_id}", get(paged_by_section))
        .route(
            "/equipments/section-manager/{section_manager_id}",
            get(paged_by_section_manager),
        )
        .route("/Active", get(active_paged))
        .route("/SearchByName", get(search_by_name))
        .route(
            "/SearchByNameAndBySectionManagerId/{section_manager_id}",
            get(search_by_name_and_section_manager),
        )
        .route(
            "/Equipment_With_More_Than_Three_Maintenances_In_Last_Year",
            get(with_frequent_maintenance),
        )
        .route(
            "/Get_Transferred_Equipments_By_DepartmentId",
            get(transferred_from_department),
        )
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<EquipmentDto>,
) -> Result<Json<EquipmentDto>, ApiError> {
    Ok(Json(EquipmentService::create(&state.conn, dto).await?))
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<EquipmentDto>,
) -> Result<Json<EquipmentDto>, ApiError> {
    Ok(Json(EquipmentService::update(&state.conn, dto).await?))
}

async fn remove(
    State(state): State<AppState>,
    Query(query): Query<EquipmentId>,
) -> Result<StatusCode, ApiError> {
    EquipmentService::delete(&state.conn, query.equipment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn get_by_id(
    State(state): State<AppState>,
    Query(query): Query<EquipmentId>,
) -> Result<Json<EquipmentDto>, ApiError> {
    Ok(Json(
        EquipmentService::get_by_id(&state.conn, query.equipment_id).await?,
    ))
}

async fn list(State(state): State<AppState>) -> Result<Json<Vec<EquipmentDto>>, ApiError> {
    Ok(Json(EquipmentService::list(&state.conn).await?))
}

async fn get_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(EquipmentService::get_paged(&state.conn, request).await?))
}

async fn paged_by_department(
    State(state): State<AppState>,
    Path(department_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::paged_by_department(&state.conn, department_id, request).await?,
    ))
}

async fn paged_by_section(
    State(state): State<AppState>,
    Path(section_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::paged_by_section(&state.conn, section_id, request).await?,
    ))
}

async fn paged_by_section_manager(
    State(state): State<AppState>,
    Path(section_manager_id): Path<i32>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::paged_by_section_manager(&state.conn, section_manager_id, request)
            .await?,
    ))
}

async fn active_paged(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(EquipmentService::active_paged(&state.conn, request).await?))
}

async fn search_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::search_by_name(&state.conn, &query.name, request).await?,
    ))
}

async fn search_by_name_and_section_manager(
    State(state): State<AppState>,
    Path(section_manager_id): Path<i32>,
    Query(query): Query<NameQuery>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::search_by_name_and_section_manager(
            &state.conn,
            &query.name,
            section_manager_id,
            request,
        )
        .await?,
    ))
}

async fn with_frequent_maintenance(
    State(state): State<AppState>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::with_frequent_maintenance(&state.conn, request).await?,
    ))
}

async fn transferred_from_department(
    State(state): State<AppState>,
    Query(query): Query<DepartmentId>,
    Paged(request): Paged,
) -> Result<Json<PagedResult<EquipmentDto>>, ApiError> {
    Ok(Json(
        EquipmentService::transferred_from_department(&state.conn, query.department_id, request)
            .await?,
    ))
}
