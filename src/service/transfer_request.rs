use super::{
    delete_existing, get, list, paged, require_department_in_section, require_existing,
    require_reference, require_role,
};
use crate::{
    dto::TransferRequestDto,
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{
    equipment,
    sea_orm_active_enums::{TransferStatus, UserRole},
    transfer_request,
};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct TransferRequestService;

impl TransferRequestService {
    /// File a request. The equipment's current department is recorded as
    /// the source and the request starts out `Pending`.
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, mut dto: TransferRequestDto) -> Result<TransferRequestDto> {
        let uow = UnitOfWork::begin(db).await?;
        let equipment = Self::check(&uow, &dto).await?;
        dto.source_department_id = equipment.department_id;
        dto.source_section_id = equipment.section_id;
        dto.status = TransferStatus::Pending;
        let model = uow
            .repository::<transfer_request::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(
            request_id = model.id,
            equipment_id = model.equipment_id,
            arrival_department_id = model.arrival_department_id,
            "transfer requested"
        );
        Ok(model.into())
    }

    /// Edit a request that has not been registered yet
    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, mut dto: TransferRequestDto) -> Result<TransferRequestDto> {
        let uow = UnitOfWork::begin(db).await?;
        let current =
            require_existing::<transfer_request::Entity>(&uow, dto.id, "Transfer request").await?;
        if current.status == TransferStatus::Registered {
            return Err(ServiceError::conflict(format!(
                "Transfer request with ID {} is already registered",
                dto.id
            )));
        }
        let equipment = Self::check(&uow, &dto).await?;
        dto.source_department_id = equipment.department_id;
        dto.source_section_id = equipment.section_id;
        dto.status = current.status;
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow
            .repository::<transfer_request::Entity>()
            .update(model)
            .await?;
        uow.complete().await?;
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        delete_existing::<transfer_request::Entity>(&uow, id, "Transfer request").await?;
        uow.complete().await?;
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<TransferRequestDto> {
        get::<transfer_request::Entity, _>(db, id, "Transfer request").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<TransferRequestDto>> {
        list::<transfer_request::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<TransferRequestDto>> {
        paged::<transfer_request::Entity, _, _>(db, [], &request).await
    }

    /// Requests bringing equipment into `department_id`
    #[instrument(skip(db))]
    pub async fn paged_by_arrival_department(
        db: &DbConn,
        department_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<TransferRequestDto>> {
        paged::<transfer_request::Entity, _, _>(
            db,
            [filter::transfer_request::by_arrival_department_id(department_id)],
            &request,
        )
        .await
    }

    #[instrument(skip(db))]
    pub async fn pending_paged(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<TransferRequestDto>> {
        paged::<transfer_request::Entity, _, _>(
            db,
            [filter::transfer_request::by_status(TransferStatus::Pending)],
            &request,
        )
        .await
    }

    async fn check(uow: &UnitOfWork, dto: &TransferRequestDto) -> Result<equipment::Model> {
        require_role(uow, dto.section_manager_id, UserRole::SectionManager).await?;
        let equipment =
            require_reference::<equipment::Entity>(uow, dto.equipment_id, "Equipment").await?;
        require_department_in_section(uow, dto.arrival_department_id, dto.arrival_section_id)
            .await?;
        if equipment.department_id == dto.arrival_department_id {
            return Err(ServiceError::conflict(format!(
                "Equipment with ID {} is already in department {}",
                equipment.id, equipment.department_id
            )));
        }
        Ok(equipment)
    }
}
