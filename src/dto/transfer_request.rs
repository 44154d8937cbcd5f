use chrono::NaiveDate;
use downtrack_entity::{sea_orm_active_enums::TransferStatus, transfer_request};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

/// A request to move equipment into another department.
///
/// `source_department_id`, `source_section_id` and `status` are managed by
/// the service: whatever a client sends for them is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequestDto {
    #[serde(default)]
    pub id: i32,
    pub date: NaiveDate,
    pub section_manager_id: i32,
    pub equipment_id: i32,
    #[serde(default)]
    pub source_department_id: i32,
    #[serde(default)]
    pub source_section_id: i32,
    pub arrival_department_id: i32,
    pub arrival_section_id: i32,
    #[serde(default = "pending")]
    pub status: TransferStatus,
}

fn pending() -> TransferStatus {
    TransferStatus::Pending
}

impl From<transfer_request::Model> for TransferRequestDto {
    fn from(model: transfer_request::Model) -> Self {
        Self {
            id: model.id,
            date: model.date,
            section_manager_id: model.section_manager_id,
            equipment_id: model.equipment_id,
            source_department_id: model.source_department_id,
            source_section_id: model.source_section_id,
            arrival_department_id: model.arrival_department_id,
            arrival_section_id: model.arrival_section_id,
            status: model.status,
        }
    }
}

impl IntoActiveModel<transfer_request::ActiveModel> for TransferRequestDto {
    fn into_active_model(self) -> transfer_request::ActiveModel {
        transfer_request::ActiveModel {
            id: NotSet,
            date: Set(self.date),
            section_manager_id: Set(self.section_manager_id),
            equipment_id: Set(self.equipment_id),
            source_department_id: Set(self.source_department_id),
            source_section_id: Set(self.source_section_id),
            arrival_department_id: Set(self.arrival_department_id),
            arrival_section_id: Set(self.arrival_section_id),
            status: Set(self.status),
        }
    }
}
