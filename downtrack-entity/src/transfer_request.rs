use super::sea_orm_active_enums::TransferStatus;
use sea_orm::entity::prelude::*;

/// A section manager's request to move a piece of equipment into another
/// department. The source department is captured when the request is made.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transfer_request")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub section_manager_id: i32,
    pub equipment_id: i32,
    pub source_department_id: i32,
    pub source_section_id: i32,
    pub arrival_department_id: i32,
    pub arrival_section_id: i32,
    pub status: TransferStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::SectionManagerId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    SectionManager,
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Equipment,
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::ArrivalDepartmentId",
        to = "super::department::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ArrivalDepartment,
    #[sea_orm(has_one = "super::transfer::Entity")]
    Transfer,
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<super::transfer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transfer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
