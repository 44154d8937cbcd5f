use super::{delete_existing, get, list, paged, require_existing, require_reference, require_role};
use crate::{
    dto::DoneMaintenanceDto,
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{done_maintenance, equipment, sea_orm_active_enums::UserRole};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use tracing::{info, instrument};

/// Maintenance records performed on equipment
#[derive(Debug)]
pub struct MaintenanceService;

impl MaintenanceService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, dto: DoneMaintenanceDto) -> Result<DoneMaintenanceDto> {
        let uow = UnitOfWork::begin(db).await?;
        Self::check(&uow, &dto).await?;
        let model = uow
            .repository::<done_maintenance::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(maintenance_id = model.id, "maintenance recorded");
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: DoneMaintenanceDto) -> Result<DoneMaintenanceDto> {
        let uow = UnitOfWork::begin(db).await?;
        require_existing::<done_maintenance::Entity>(&uow, dto.id, "Maintenance").await?;
        Self::check(&uow, &dto).await?;
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow
            .repository::<done_maintenance::Entity>()
            .update(model)
            .await?;
        uow.complete().await?;
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        delete_existing::<done_maintenance::Entity>(&uow, id, "Maintenance").await?;
        uow.complete().await?;
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<DoneMaintenanceDto> {
        get::<done_maintenance::Entity, _>(db, id, "Maintenance").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<DoneMaintenanceDto>> {
        list::<done_maintenance::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<DoneMaintenanceDto>> {
        paged::<done_maintenance::Entity, _, _>(db, [], &request).await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_technician(
        db: &DbConn,
        technician_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<DoneMaintenanceDto>> {
        paged::<done_maintenance::Entity, _, _>(
            db,
            [filter::done_maintenance::by_technician_id(technician_id)],
            &request,
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_equipment(
        db: &DbConn,
        equipment_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<DoneMaintenanceDto>> {
        paged::<done_maintenance::Entity, _, _>(
            db,
            [filter::done_maintenance::by_equipment_id(equipment_id)],
            &request,
        )
        .await
    }

    async fn check(uow: &UnitOfWork, dto: &DoneMaintenanceDto) -> Result<()> {
        let (Some(technician_id), Some(equipment_id)) = (dto.technician_id, dto.equipment_id)
        else {
            return Err(ServiceError::validation(
                "A maintenance record needs a technician and a piece of equipment",
            ));
        };
        if dto.cost < 0.0 {
            return Err(ServiceError::validation("Cost must not be negative"));
        }
        require_role(uow, technician_id, UserRole::Technician).await?;
        require_reference::<equipment::Entity>(uow, equipment_id, "Equipment").await?;
        Ok(())
    }
}
