use chrono::NaiveDate;
use downtrack_entity::transfer;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDto {
    #[serde(default)]
    pub id: i32,
    pub request_id: i32,
    pub shipping_supervisor_id: Option<i32>,
    pub equipment_receptor_id: Option<i32>,
    pub date: NaiveDate,
}

impl From<transfer::Model> for TransferDto {
    fn from(model: transfer::Model) -> Self {
        Self {
            id: model.id,
            request_id: model.request_id,
            shipping_supervisor_id: model.shipping_supervisor_id,
            equipment_receptor_id: model.equipment_receptor_id,
            date: model.date,
        }
    }
}

impl IntoActiveModel<transfer::ActiveModel> for TransferDto {
    fn into_active_model(self) -> transfer::ActiveModel {
        transfer::ActiveModel {
            id: NotSet,
            request_id: Set(self.request_id),
            shipping_supervisor_id: Set(self.shipping_supervisor_id),
            equipment_receptor_id: Set(self.equipment_receptor_id),
            date: Set(self.date),
        }
    }
}
