use sea_orm::entity::prelude::*;

/// A maintenance performed on a piece of equipment. Both references are
/// cleared, not cascaded, when the technician or the equipment goes away.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "done_maintenance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub technician_id: Option<i32>,
    pub equipment_id: Option<i32>,
    #[sea_orm(column_name = "type")]
    pub r#type: String,
    pub cost: f64,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::TechnicianId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Technician,
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Equipment,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technician.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
