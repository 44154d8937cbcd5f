use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub technician_id: i32,
    pub section_manager_id: Option<i32>,
    pub description: String,
    pub score: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::TechnicianId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Technician,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::SectionManagerId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    SectionManager,
}

impl ActiveModelBehavior for ActiveModel {}
