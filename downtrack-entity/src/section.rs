use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub section_manager_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::SectionManagerId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    SectionManager,
    #[sea_orm(has_many = "super::department::Entity")]
    Department,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SectionManager.def()
    }
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
