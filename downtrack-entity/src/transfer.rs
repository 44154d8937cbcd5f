use sea_orm::entity::prelude::*;

/// The registration of a transfer request by an equipment receptor.
/// At most one transfer exists per request.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "transfer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub request_id: i32,
    pub shipping_supervisor_id: Option<i32>,
    pub equipment_receptor_id: Option<i32>,
    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transfer_request::Entity",
        from = "Column::RequestId",
        to = "super::transfer_request::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    TransferRequest,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::ShippingSupervisorId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ShippingSupervisor,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EquipmentReceptorId",
        to = "super::employee::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    EquipmentReceptor,
}

impl Related<super::transfer_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransferRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
