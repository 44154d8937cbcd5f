use super::{delete_existing, get, list, paged, require_existing, require_role};
use crate::{
    dto::EvaluationDto,
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{evaluation, sea_orm_active_enums::UserRole};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use std::ops::RangeInclusive;
use tracing::{info, instrument};

pub const SCORE_RANGE: RangeInclusive<i32> = 0..=10;

#[derive(Debug)]
pub struct EvaluationService;

impl EvaluationService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, dto: EvaluationDto) -> Result<EvaluationDto> {
        let uow = UnitOfWork::begin(db).await?;
        Self::check(&uow, &dto).await?;
        let model = uow
            .repository::<evaluation::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(
            evaluation_id = model.id,
            technician_id = model.technician_id,
            "technician evaluated"
        );
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: EvaluationDto) -> Result<EvaluationDto> {
        let uow = UnitOfWork::begin(db).await?;
        require_existing::<evaluation::Entity>(&uow, dto.id, "Evaluation").await?;
        Self::check(&uow, &dto).await?;
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow.repository::<evaluation::Entity>().update(model).await?;
        uow.complete().await?;
        Ok(model.into())
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        delete_existing::<evaluation::Entity>(&uow, id, "Evaluation").await?;
        uow.complete().await?;
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<EvaluationDto> {
        get::<evaluation::Entity, _>(db, id, "Evaluation").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<EvaluationDto>> {
        list::<evaluation::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(db: &DbConn, request: PagedRequest) -> Result<PagedResult<EvaluationDto>> {
        paged::<evaluation::Entity, _, _>(db, [], &request).await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_technician(
        db: &DbConn,
        technician_id: i32,
        request: PagedRequest,
    ) -> Result<PagedResult<EvaluationDto>> {
        paged::<evaluation::Entity, _, _>(
            db,
            [filter::evaluation::by_technician_id(technician_id)],
            &request,
        )
        .await
    }

    async fn check(uow: &UnitOfWork, dto: &EvaluationDto) -> Result<()> {
        if !SCORE_RANGE.contains(&dto.score) {
            return Err(ServiceError::validation(format!(
                "Score must be between {} and {}",
                SCORE_RANGE.start(),
                SCORE_RANGE.end()
            )));
        }
        let Some(section_manager_id) = dto.section_manager_id else {
            return Err(ServiceError::validation(
                "An evaluation must name the section manager giving it",
            ));
        };
        require_role(uow, dto.technician_id, UserRole::Technician).await?;
        require_role(uow, section_manager_id, UserRole::SectionManager).await?;
        Ok(())
    }
}
