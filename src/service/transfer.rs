use super::{delete_existing, get, list, paged, require_existing, require_role};
use crate::{
    dto::TransferDto,
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{
    equipment,
    sea_orm_active_enums::{TransferStatus, UserRole},
    transfer, transfer_request,
};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel, Set};
use tracing::{info, instrument, warn};

#[derive(Debug)]
pub struct TransferService;

impl TransferService {
    /// Confirm the receipt of a pending transfer request.
    ///
    /// Records the transfer, marks the request `Registered` and moves the
    /// equipment into the arrival department. A request is registered at
    /// most once; a second attempt is a conflict and changes nothing.
    #[instrument(skip(db))]
    pub async fn register(db: &DbConn, dto: TransferDto) -> Result<TransferDto> {
        let uow = UnitOfWork::begin(db).await?;
        let request =
            require_existing::<transfer_request::Entity>(&uow, dto.request_id, "Transfer request")
                .await?;
        Self::check(&uow, &dto).await?;

        let claimed = uow
            .repository::<transfer_request::Entity>()
            .update_column_where(
                transfer_request::Column::Status,
                TransferStatus::Registered,
                [
                    filter::transfer_request::by_id(request.id),
                    filter::transfer_request::by_status(TransferStatus::Pending),
                ],
            )
            .await?;
        if claimed == 0 {
            warn!(request_id = request.id, "transfer request registered twice");
            return Err(ServiceError::conflict(format!(
                "Transfer request with ID {} is already registered",
                request.id
            )));
        }

        let model = uow
            .repository::<transfer::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.repository::<equipment::Entity>()
            .update(equipment::ActiveModel {
                id: Unchanged(request.equipment_id),
                department_id: Set(request.arrival_department_id),
                section_id: Set(request.arrival_section_id),
                ..Default::default()
            })
            .await?;
        uow.complete().await?;
        info!(
            transfer_id = model.id,
            request_id = request.id,
            equipment_id = request.equipment_id,
            arrival_department_id = request.arrival_department_id,
            "transfer registered"
        );
        Ok(model.into())
    }

    /// Correct the people or the date of a transfer. The request it
    /// registers cannot change.
    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: TransferDto) -> Result<TransferDto> {
        let uow = UnitOfWork::begin(db).await?;
        let current = require_existing::<transfer::Entity>(&uow, dto.id, "Transfer").await?;
        if current.request_id != dto.request_id {
            return Err(ServiceError::conflict(format!(
                "Transfer with ID {} registers request {}, not {}",
                dto.id, current.request_id, dto.request_id
            )));
        }
        Self::check(&uow, &dto).await?;
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow.repository::<transfer::Entity>().update(model).await?;
        uow.complete().await?;
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        delete_existing::<transfer::Entity>(&uow, id, "Transfer").await?;
        uow.complete().await?;
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<TransferDto> {
        get::<transfer::Entity, _>(db, id, "Transfer").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<TransferDto>> {
        list::<transfer::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(db: &DbConn, request: PagedRequest) -> Result<PagedResult<TransferDto>> {
        paged::<transfer::Entity, _, _>(db, [], &request).await
    }

    async fn check(uow: &UnitOfWork, dto: &TransferDto) -> Result<()> {
        let (Some(supervisor_id), Some(receptor_id)) =
            (dto.shipping_supervisor_id, dto.equipment_receptor_id)
        else {
            return Err(ServiceError::validation(
                "A transfer needs a shipping supervisor and an equipment receptor",
            ));
        };
        require_role(uow, supervisor_id, UserRole::ShippingSupervisor).await?;
        require_role(uow, receptor_id, UserRole::EquipmentReceptor).await?;
        Ok(())
    }
}
