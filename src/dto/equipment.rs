use chrono::NaiveDate;
use downtrack_entity::{equipment, sea_orm_active_enums::EquipmentStatus};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub r#type: String,
    pub status: EquipmentStatus,
    pub date_of_acquisition: NaiveDate,
    pub department_id: i32,
    pub section_id: i32,
}

impl From<equipment::Model> for EquipmentDto {
    fn from(model: equipment::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            r#type: model.r#type,
            status: model.status,
            date_of_acquisition: model.date_of_acquisition,
            department_id: model.department_id,
            section_id: model.section_id,
        }
    }
}

impl IntoActiveModel<equipment::ActiveModel> for EquipmentDto {
    fn into_active_model(self) -> equipment::ActiveModel {
        equipment::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            r#type: Set(self.r#type),
            status: Set(self.status),
            date_of_acquisition: Set(self.date_of_acquisition),
            department_id: Set(self.department_id),
            section_id: Set(self.section_id),
        }
    }
}
