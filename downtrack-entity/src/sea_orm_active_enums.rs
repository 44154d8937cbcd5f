use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role tag carried by every employee.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum UserRole {
    #[sea_orm(string_value = "Administrator")]
    Administrator,
    #[sea_orm(string_value = "Director")]
    Director,
    #[sea_orm(string_value = "SectionManager")]
    SectionManager,
    #[sea_orm(string_value = "Technician")]
    Technician,
    #[sea_orm(string_value = "EquipmentReceptor")]
    EquipmentReceptor,
    #[sea_orm(string_value = "ShippingSupervisor")]
    ShippingSupervisor,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum EquipmentStatus {
    #[sea_orm(string_value = "Active")]
    Active,
    #[sea_orm(string_value = "UnderMaintenance")]
    UnderMaintenance,
    #[sea_orm(string_value = "Inactive")]
    Inactive,
}

/// A transfer request is `Pending` until a receptor registers the transfer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum TransferStatus {
    #[sea_orm(string_value = "Pending")]
    Pending,
    #[sea_orm(string_value = "Registered")]
    Registered,
}
