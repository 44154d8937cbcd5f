use super::{
    delete_existing, get, list, paged, require_department_in_section, require_existing,
};
use crate::{
    dto::{EmployeeDto, RoleProfile},
    error::{Result, ServiceError},
    filter,
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{
    done_maintenance, employee, evaluation, sea_orm_active_enums::UserRole, section,
};
use sea_orm::{ActiveValue::Unchanged, DbConn, IntoActiveModel};
use tracing::{info, instrument};

#[derive(Debug)]
pub struct EmployeeService;

impl EmployeeService {
    #[instrument(skip(db))]
    pub async fn create(db: &DbConn, dto: EmployeeDto) -> Result<EmployeeDto> {
        let uow = UnitOfWork::begin(db).await?;
        Self::check(&uow, &dto).await?;
        let model = uow
            .repository::<employee::Entity>()
            .create(dto.into_active_model())
            .await?;
        uow.complete().await?;
        info!(employee_id = model.id, role = ?model.user_role, "employee created");
        Ok(model.into())
    }

    /// Replace an employee. A section manager keeps the role while any
    /// section still names them, and a technician while any maintenance
    /// record or evaluation does.
    #[instrument(skip(db))]
    pub async fn update(db: &DbConn, dto: EmployeeDto) -> Result<EmployeeDto> {
        let uow = UnitOfWork::begin(db).await?;
        let current = require_existing::<employee::Entity>(&uow, dto.id, "Employee").await?;
        Self::check(&uow, &dto).await?;
        if current.user_role == UserRole::SectionManager
            && dto.role.user_role() != UserRole::SectionManager
        {
            Self::ensure_manages_nothing(&uow, dto.id).await?;
        }
        if current.user_role == UserRole::Technician
            && dto.role.user_role() != UserRole::Technician
        {
            Self::ensure_no_technician_history(&uow, dto.id).await?;
        }
        let id = dto.id;
        let mut model = dto.into_active_model();
        model.id = Unchanged(id);
        let model = uow.repository::<employee::Entity>().update(model).await?;
        uow.complete().await?;
        Ok(model.into())
    }

    /// Delete an employee. Maintenance records keep their history with the
    /// technician cleared; evaluations of a technician go with them.
    #[instrument(skip(db))]
    pub async fn delete(db: &DbConn, id: i32) -> Result<()> {
        let uow = UnitOfWork::begin(db).await?;
        Self::ensure_manages_nothing(&uow, id).await?;
        uow.repository::<done_maintenance::Entity>()
            .update_column_where(
                done_maintenance::Column::TechnicianId,
                None::<i32>,
                [filter::done_maintenance::by_technician_id(id)],
            )
            .await?;
        let evaluations = uow.repository::<evaluation::Entity>();
        evaluations
            .delete_where([filter::evaluation::by_technician_id(id)])
            .await?;
        evaluations
            .update_column_where(
                evaluation::Column::SectionManagerId,
                None::<i32>,
                [filter::evaluation::by_section_manager_id(id)],
            )
            .await?;
        delete_existing::<employee::Entity>(&uow, id, "Employee").await?;
        uow.complete().await?;
        info!(employee_id = id, "employee deleted");
        Ok(())
    }

    pub async fn get_by_id(db: &DbConn, id: i32) -> Result<EmployeeDto> {
        get::<employee::Entity, _>(db, id, "Employee").await
    }

    pub async fn list(db: &DbConn) -> Result<Vec<EmployeeDto>> {
        list::<employee::Entity, _>(db).await
    }

    #[instrument(skip(db))]
    pub async fn get_paged(db: &DbConn, request: PagedRequest) -> Result<PagedResult<EmployeeDto>> {
        paged::<employee::Entity, _, _>(db, [], &request).await
    }

    #[instrument(skip(db))]
    pub async fn paged_by_role(
        db: &DbConn,
        role: UserRole,
        request: PagedRequest,
    ) -> Result<PagedResult<EmployeeDto>> {
        paged::<employee::Entity, _, _>(db, [filter::employee::by_role(role)], &request).await
    }

    pub async fn technicians_paged(
        db: &DbConn,
        request: PagedRequest,
    ) -> Result<PagedResult<EmployeeDto>> {
        Self::paged_by_role(db, UserRole::Technician, request).await
    }

    async fn check(uow: &UnitOfWork, dto: &EmployeeDto) -> Result<()> {
        if dto.user_name.trim().is_empty() {
            return Err(ServiceError::validation("User name must not be empty"));
        }
        let taken = uow
            .repository::<employee::Entity>()
            .exists([
                filter::employee::by_user_name(&dto.user_name),
                filter::employee::excluding_id(dto.id),
            ])
            .await?;
        if taken {
            return Err(ServiceError::conflict(format!(
                "User name '{}' is already taken",
                dto.user_name
            )));
        }
        match dto.role {
            RoleProfile::Technician {
                salary, exp_years, ..
            } if salary < 0.0 || exp_years < 0 => Err(ServiceError::validation(
                "Salary and years of experience must not be negative",
            )),
            RoleProfile::EquipmentReceptor {
                department_id: Some(department_id),
                section_id: Some(section_id),
            } => {
                require_department_in_section(uow, department_id, section_id).await?;
                Ok(())
            }
            RoleProfile::EquipmentReceptor { .. } => Err(ServiceError::validation(
                "An equipment receptor needs a department and a section",
            )),
            _ => Ok(()),
        }
    }

    async fn ensure_no_technician_history(uow: &UnitOfWork, employee_id: i32) -> Result<()> {
        let maintenances = uow
            .repository::<done_maintenance::Entity>()
            .count([filter::done_maintenance::by_technician_id(employee_id)])
            .await?;
        let evaluations = uow
            .repository::<evaluation::Entity>()
            .count([filter::evaluation::by_technician_id(employee_id)])
            .await?;
        if maintenances + evaluations > 0 {
            return Err(ServiceError::conflict(format!(
                "Employee with ID {employee_id} has {maintenances} maintenance record(s) and \
                 {evaluations} evaluation(s) as a technician"
            )));
        }
        Ok(())
    }

    async fn ensure_manages_nothing(uow: &UnitOfWork, employee_id: i32) -> Result<()> {
        let managed = uow
            .repository::<section::Entity>()
            .count([filter::section::by_manager_id(employee_id)])
            .await?;
        if managed > 0 {
            return Err(ServiceError::conflict(format!(
                "Employee with ID {employee_id} still manages {managed} section(s)"
            )));
        }
        Ok(())
    }
}
