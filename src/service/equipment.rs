use super::{delete_existing, get, list, paged, require_department_in_section, require_existing};
use crate::{
    dto::EquipmentDto,
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use chrono::{Duration, NaiveDate, Utc};
use downtrack_entity::{done_maintenance, equipment, sea_orm_active_enums::EquipmentStatus};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use tracing::{info, instrument};

/// Equipment maintained more often than this within [`MAINTENANCE_WINDOW_DAYS`]
/// is reported by [`EquipmentService::with_frequent_maintenance`]
pub const FREQUENT_MAINTENANCE_THRESHOLD: u64 = 3;

pub const MAINTENANCE_WINDOW_DAYS: i64 = 365;

#[derive(Debug)]
pub struct EquipmentService;

impl EquipmentService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, dto: EquipmentDto) -> Result<EquipmentDto> {
        let uow = UnitOfWork::begin(db).await?;
        Self::check(&uow, &dto).await?;
        let model = uow
            .repository::<equipment::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(equipment_id = model.id, department_id = model.department_id, "equipment created");
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: EquipmentDto) -> Result<EquipmentDto> {
        let uow = UnitOfWork::begin(db).await?;
        require_existing::<equipment::Entity>(&uow, dto.id, "Equipment").await?;
        Self::check(&uow, &dto).await?;
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow.repository::<equipment::Entity>().update(model).await?;
        uow.complete().await?;
        Ok(model.into())
    }

    /// Delete equipment, keeping its maintenance history
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        uow.repository::<done_maintenance::Entity>()
            .update_column_where(
                done_maintenance::Column::EquipmentId,
                None::<i32>,
                [filter::done_maintenance::by_equipment_id(id)],
            )
            .await?;
        delete_existing::<equipment::Entity>(&uow, id, "Equipment").await?;
        uow.complete().await?;
        info!(equipment_id = id, "equipment deleted");
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<EquipmentDto> {
        get::<equipment::Entity, _>(db, id, "Equipment").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<EquipmentDto>> {
        list::<equipment::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(db: &DbConn, request: PagedRequest) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(db, [], &request).await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_department(
        db: &DbConn,
        department_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(
            db,
            [filter::equipment::by_department_id(department_id)],
            &request,
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_section(
        db: &DbConn,
        section_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(db, [filter::equipment::by_section_id(section_id)], &request)
            .await
    }

    /// Equipment in every section managed by `manager_id`
    #[instrument(skip(db))]
    pub async fn paged_by_section_manager(
        db: &DbConn,
        manager_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(db, [filter::equipment::managed_by(manager_id)], &request)
            .await
    }

    #[instrument(skip(db))]
    pub async fn active_paged(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(
            db,
            [filter::equipment::by_status(EquipmentStatus::Active)],
            &request,
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn search_by_name(
        db: &DbConn,
        name: &str,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(db, [filter::equipment::name_contains(name)], &request)
            .await
    }

    #[instrument(skip(db))]
    pub async fn search_by_name_and_section_manager(
        db: &DbConn,
        name: &str,
        manager_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(
            db,
            [
                filter::equipment::name_contains(name),
                filter::equipment::managed_by(manager_id),
            ],
            &request,
        )
        .await
    }

    /// Equipment maintained more than three times over the past year
    pub async fn with_frequent_maintenance(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        let since = Utc::now().date_naive() - Duration::days(MAINTENANCE_WINDOW_DAYS);
        Self::with_frequent_maintenance_since(db, since, request).await
    }

    #[instrument(skip(db))]
    pub async fn with_frequent_maintenance_since(
        db: &DbConn,
        since: NaiveDate,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(
            db,
            [filter::equipment::maintained_more_than(
                FREQUENT_MAINTENANCE_THRESHOLD,
                since,
            )],
            &request,
        )
        .await
    }

    /// Equipment that left `department_id` through a registered transfer
    #[instrument(skip(db))]
    pub async fn transferred_from_department(
        db: &DbConn,
        department_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<EquipmentDto>> {
        paged::<equipment::Entity, _, _>(
            db,
            [filter::equipment::transferred_from(department_id)],
            &request,
        )
        .await
    }

    async fn check(uow: &UnitOfWork, dto: &EquipmentDto) -> Result<()> {
        if dto.name.trim().is_empty() {
            return Err(ServiceError::validation("Equipment name must not be empty"));
        }
        require_department_in_section(uow, dto.department_id, dto.section_id).await?;
        Ok(())
    }
}
