use downtrack_entity::section;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub section_manager_id: i32,
}

impl From<section::Model> for SectionDto {
    fn from(model: section::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            section_manager_id: model.section_manager_id,
        }
    }
}

impl IntoActiveModel<section::ActiveModel> for SectionDto {
    fn into_active_model(self) -> section::ActiveModel {
        section::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            section_manager_id: Set(self.section_manager_id),
        }
    }
}
