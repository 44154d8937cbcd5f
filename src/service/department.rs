use super::{delete_existing, get, list, paged, require_existing, require_reference};
use crate::{
    dto::DepartmentDto,
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{
    department, employee, equipment, sea_orm_active_enums::TransferStatus, section,
    transfer_request,
};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct DepartmentService;

impl DepartmentService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, dto: DepartmentDto) -> Result<DepartmentDto> {
        let uow = UnitOfWork::begin(db).await?;
        Self::check(&uow, &dto).await?;
        let model = uow
            .repository::<department::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(department_id = model.id, section_id = model.section_id, "department created");
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: DepartmentDto) -> Result<DepartmentDto> {
        let uow = UnitOfWork::begin(db).await?;
        let current = require_existing::<department::Entity>(&uow, dto.id, "Department").await?;
        Self::check(&uow, &dto).await?;
        if current.section_id != dto.section_id {
            Self::move_contents(&uow, dto.id, dto.section_id).await?;
        }
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow.repository::<department::Entity>().update(model).await?;
        uow.complete().await?;
        Ok(model.into())
    }

    /// Delete a department and, through the store, its equipment
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        Self::release_receptors(&uow, id).await?;
        delete_existing::<department::Entity>(&uow, id, "Department").await?;
        uow.complete().await?;
        info!(department_id = id, "department deleted");
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<DepartmentDto> {
        get::<department::Entity, _>(db, id, "Department").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<DepartmentDto>> {
        list::<department::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<DepartmentDto>> {
        paged::<department::Entity, _, _>(db, [], &request).await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_section(
        db: &DbConn,
        section_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<DepartmentDto>> {
        paged::<department::Entity, _, _>(
            db,
            [filter::department::by_section_id(section_id)],
            &request,
        )
        .await
    }

    async fn check(uow: &UnitOfWork, dto: &DepartmentDto) -> Result<()> {
        if dto.name.trim().is_empty() {
            return Err(ServiceError::validation("Department name must not be empty"));
        }
        require_reference::<section::Entity>(uow, dto.section_id, "Section").await?;
        let taken = uow
            .repository::<department::Entity>()
            .exists([
                filter::department::by_name(&dto.name),
                filter::department::by_section_id(dto.section_id),
                filter::department::excluding_id(dto.id),
            ])
            .await?;
        if taken {
            return Err(ServiceError::conflict(format!(
                "A department named '{}' already exists in section {}",
                dto.name, dto.section_id
            )));
        }
        Ok(())
    }

    /// Equipment, receptors and pending transfer requests follow their
    /// department into another section
    async fn move_contents(uow: &UnitOfWork, department_id: i32, section_id: i32) -> Result<()> {
        uow.repository::<equipment::Entity>()
            .update_column_where(
                equipment::Column::SectionId,
                section_id,
                [filter::equipment::by_department_id(department_id)],
            )
            .await?;
        uow.repository::<employee::Entity>()
            .update_column_where(
                employee::Column::SectionId,
                Some(section_id),
                [filter::employee::by_department_id(department_id)],
            )
            .await?;
        let requests = uow.repository::<transfer_request::Entity>();
        requests
            .update_column_where(
                transfer_request::Column::ArrivalSectionId,
                section_id,
                [
                    filter::transfer_request::by_arrival_department_id(department_id),
                    filter::transfer_request::by_status(TransferStatus::Pending),
                ],
            )
            .await?;
        requests
            .update_column_where(
                transfer_request::Column::SourceSectionId,
                section_id,
                [
                    filter::transfer_request::by_source_department_id(department_id),
                    filter::transfer_request::by_status(TransferStatus::Pending),
                ],
            )
            .await?;
        Ok(())
    }

    /// Receptors have no store-level link to their department
    async fn release_receptors(uow: &UnitOfWork, department_id: i32) -> Result<()> {
        let employees = uow.repository::<employee::Entity>();
        let workplace = [filter::employee::by_department_id(department_id)];
        employees
            .update_column_where(employee::Column::SectionId, None::<i32>, workplace.clone())
            .await?;
        employees
            .update_column_where(employee::Column::DepartmentId, None::<i32>, workplace)
            .await?;
        Ok(())
    }
}
