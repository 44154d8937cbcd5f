use downtrack_entity::department;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub section_id: i32,
}

impl From<department::Model> for DepartmentDto {
    fn from(model: department::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            section_id: model.section_id,
        }
    }
}

impl IntoActiveModel<department::ActiveModel> for DepartmentDto {
    fn into_active_model(self) -> department::ActiveModel {
        department::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            section_id: Set(self.section_id),
        }
    }
}
