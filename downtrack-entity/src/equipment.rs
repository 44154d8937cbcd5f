use super::sea_orm_active_enums::EquipmentStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub r#type: String,
    pub status: EquipmentStatus,
    pub date_of_acquisition: Date,
    pub department_id: i32,
    pub section_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DepartmentId",
        to = "super::department::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Department,
    #[sea_orm(has_many = "super::done_maintenance::Entity")]
    DoneMaintenance,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::done_maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DoneMaintenance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
