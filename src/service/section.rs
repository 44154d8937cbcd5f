use super::{delete_existing, get, list, paged, require_existing, require_role};
use crate::{
    dto::{DepartmentDto, SectionDto},
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{department, employee, sea_orm_active_enums::UserRole, section};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct SectionService;

impl SectionService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, dto: SectionDto) -> Result<SectionDto> {
        let uow = UnitOfWork::begin(db).await?;
        Self::check(&uow, &dto).await?;
        let model = uow
            .repository::<section::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(section_id = model.id, "section created");
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: SectionDto) -> Result<SectionDto> {
        let uow = UnitOfWork::begin(db).await?;
        require_existing::<section::Entity>(&uow, dto.id, "Section").await?;
        Self::check(&uow, &dto).await?;
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow.repository::<section::Entity>().update(model).await?;
        uow.complete().await?;
        Ok(model.into())
    }

    /// Delete a section together with its departments. Receptors working in
    /// it lose their workplace.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        let employees = uow.repository::<employee::Entity>();
        employees
            .update_column_where(
                employee::Column::DepartmentId,
                None::<i32>,
                [filter::employee::by_section_id(id)],
            )
            .await?;
        employees
            .update_column_where(
                employee::Column::SectionId,
                None::<i32>,
                [filter::employee::by_section_id(id)],
            )
            .await?;
        delete_existing::<section::Entity>(&uow, id, "Section").await?;
        uow.complete().await?;
        info!(section_id = id, "section deleted");
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<SectionDto> {
        get::<section::Entity, _>(db, id, "Section").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<SectionDto>> {
        list::<section::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(db: &DbConn, request: PagedRequest) -> Result<PagedResult<SectionDto>> {
        paged::<section::Entity, _, _>(db, [], &request).await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_manager(
        db: &DbConn,
        manager_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<SectionDto>> {
        paged::<section::Entity, _, _>(db, [filter::section::by_manager_id(manager_id)], &request)
            .await
    }

    /// Every department of the section, which must exist
    #[instrument(skip(db))]
    pub async fn departments_of(db: &DbConn, section_id: i32) -> Result<Vec<DepartmentDto>> {
        let uow = UnitOfWork::begin(db).await?;
        require_existing::<section::Entity>(&uow, section_id, "Section").await?;
        let departments = uow.repository::<department::Entity>();
        let models = departments
            .fetch(departments.get_all_by_items([filter::department::by_section_id(section_id)]))
            .await?;
        uow.complete().await?;
        Ok(models.into_iter().map(DepartmentDto::from).collect())
    }

    async fn check(uow: &UnitOfWork, dto: &SectionDto) -> Result<()> {
        if dto.name.trim().is_empty() {
            return Err(ServiceError::validation("Section name must not be empty"));
        }
        require_role(uow, dto.section_manager_id, UserRole::SectionManager).await?;
        let taken = uow
            .repository::<section::Entity>()
            .exists([
                filter::section::by_name(&dto.name),
                filter::section::excluding_id(dto.id),
            ])
            .await?;
        if taken {
            return Err(ServiceError::conflict(format!(
                "A section named '{}' already exists",
                dto.name
            )));
        }
        Ok(())
    }
}
