use chrono::NaiveDate;
use downtrack_entity::done_maintenance;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

/// A maintenance record. Either reference reads `null` once the technician
/// or the equipment has been deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoneMaintenanceDto {
    #[serde(default)]
    pub id: i32,
    pub technician_id: Option<i32>,
    pub equipment_id: Option<i32>,
    pub r#type: String,
    pub cost: f64,
    pub date: NaiveDate,
}

impl From<done_maintenance::Model> for DoneMaintenanceDto {
    fn from(model: done_maintenance::Model) -> Self {
        Self {
            id: model.id,
            technician_id: model.technician_id,
            equipment_id: model.equipment_id,
            r#type: model.r#type,
            cost: model.cost,
            date: model.date,
        }
    }
}

impl IntoActiveModel<done_maintenance::ActiveModel> for DoneMaintenanceDto {
    fn into_active_model(self) -> done_maintenance::ActiveModel {
        done_maintenance::ActiveModel {
            id: NotSet,
            technician_id: Set(self.technician_id),
            equipment_id: Set(self.equipment_id),
            r#type: Set(self.r#type),
            cost: Set(self.cost),
            date: Set(self.date),
        }
    }
}
