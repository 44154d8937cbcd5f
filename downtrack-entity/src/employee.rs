use super::sea_orm_active_enums::UserRole;
use sea_orm::entity::prelude::*;

/// Every person known to the system. Role-specific columns are only
/// populated for the matching `user_role`:
/// technicians carry `specialty`, `salary` and `exp_years`;
/// equipment receptors carry the `department_id`/`section_id` they work in.
/// `department_id` has no store-level foreign key (the section, department
/// and employee tables reference each other in a cycle); services clear it
/// when the department goes away.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub user_name: String,
    pub email: Option<String>,
    pub user_role: UserRole,
    pub specialty: Option<String>,
    pub salary: Option<f64>,
    pub exp_years: Option<i32>,
    pub department_id: Option<i32>,
    pub section_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id"
    )]
    Department,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
