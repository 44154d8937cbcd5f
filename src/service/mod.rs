//! One service per entity family. Every operation runs in its own
//! [`UnitOfWork`] and either completes it or leaves it to roll back.

mod department;
mod employee;
mod equipment;
mod evaluation;
mod maintenance;
mod section;
mod transfer;
mod transfer_request;

pub use department::DepartmentService;
pub use employee::EmployeeService;
pub use equipment::{EquipmentService, FREQUENT_MAINTENANCE_THRESHOLD, MAINTENANCE_WINDOW_DAYS};
pub use evaluation::{EvaluationService, SCORE_RANGE};
pub use maintenance::MaintenanceService;
pub use section::SectionService;
pub use transfer::TransferService;
pub use transfer_request::TransferRequestService;

use crate::{
    error::{Result, ServiceError},
    paging::{PagedRequest, PagedResult},
    unit_of_work::UnitOfWork,
};
use downtrack_entity::{
    department as department_entity, employee as employee_entity, sea_orm_active_enums::UserRole,
};
use sea_orm::{sea_query::SimpleExpr, DbConn, EntityTrait, PrimaryKeyTrait};

pub(crate) async fn get<E, D>(db: &DbConn, id: i32, entity_name: &str) -> Result<D>
where
    E: EntityTrait,
    E::Model: Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    D: From<E::Model>,
{
    let uow = UnitOfWork::begin(db).await?;
    let model = uow.repository::<E>().get_by_id(id).await?;
    uow.complete().await?;
    model
        .map(D::from)
        .ok_or_else(|| ServiceError::not_found(entity_name, id))
}

pub(crate) async fn list<E, D>(db: &DbConn) -> Result<Vec<D>>
where
    E: EntityTrait,
    E::Model: Sync,
    D: From<E::Model>,
{
    let uow = UnitOfWork::begin(db).await?;
    let repository = uow.repository::<E>();
    let models = repository.fetch(repository.get_all()).await?;
    uow.complete().await?;
    Ok(models.into_iter().map(D::from).collect())
}

pub(crate) async fn paged<E, D, I>(
    db: &DbConn,
    filters: I,
    request: &PagedRequest,
) -> Result<PagedResult<D>>
where
    E: EntityTrait,
    E::Model: Sync,
    D: From<E::Model>,
    I: IntoIterator<Item = SimpleExpr>,
{
    request.validate()?;
    let uow = UnitOfWork::begin(db).await?;
    let repository = uow.repository::<E>();
    let page = repository
        .get_paged(repository.get_all_by_items(filters), request)
        .await?;
    uow.complete().await?;
    Ok(page.map(D::from))
}

/// Delete the row with `id`, or report it missing
pub(crate) async fn delete_existing<E>(uow: &UnitOfWork, id: i32, entity_name: &str) -> Result<()>
where
    E: EntityTrait,
    E::Model: Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    match uow.repository::<E>().delete_by_id(id).await? {
        0 => Err(ServiceError::not_found(entity_name, id)),
        _ => Ok(()),
    }
}

pub(crate) async fn require_existing<E>(
    uow: &UnitOfWork,
    id: i32,
    entity_name: &str,
) -> Result<E::Model>
where
    E: EntityTrait,
    E::Model: Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    uow.repository::<E>()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found(entity_name, id))
}

/// Like [`require_existing`], for rows referenced by the input rather than
/// targeted by the operation: a missing row is a conflict.
pub(crate) async fn require_reference<E>(
    uow: &UnitOfWork,
    id: i32,
    entity_name: &str,
) -> Result<E::Model>
where
    E: EntityTrait,
    E::Model: Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    uow.repository::<E>()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::conflict(format!("{entity_name} with ID {id} does not exist")))
}

/// The employee `id`, provided it holds `role`
pub(crate) async fn require_role(
    uow: &UnitOfWork,
    id: i32,
    role: UserRole,
) -> Result<employee_entity::Model> {
    let employee = require_reference::<employee_entity::Entity>(uow, id, "Employee").await?;
    if employee.user_role != role {
        return Err(ServiceError::conflict(format!(
            "Employee with ID {id} is not a {role:?}"
        )));
    }
    Ok(employee)
}

/// The department `department_id`, provided it belongs to `section_id`
pub(crate) async fn require_department_in_section(
    uow: &UnitOfWork,
    department_id: i32,
    section_id: i32,
) -> Result<department_entity::Model> {
    let department =
        require_reference::<department_entity::Entity>(uow, department_id, "Department").await?;
    if department.section_id != section_id {
        return Err(ServiceError::conflict(format!(
            "Department with ID {department_id} does not belong to section {section_id}"
        )));
    }
    Ok(department)
}
