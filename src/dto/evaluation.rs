use downtrack_entity::evaluation;
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationDto {
    #[serde(default)]
    pub id: i32,
    pub technician_id: i32,
    pub section_manager_id: Option<i32>,
    /// Qualitative grade such as `Good`, `Regular` or `Bad`
    pub description: String,
    pub score: i32,
}

impl From<evaluation::Model> for EvaluationDto {
    fn from(model: evaluation::Model) -> Self {
        Self {
            id: model.id,
            technician_id: model.technician_id,
            section_manager_id: model.section_manager_id,
            description: model.description,
            score: model.score,
        }
    }
}

impl IntoActiveModel<evaluation::ActiveModel> for EvaluationDto {
    fn into_active_model(self) -> evaluation::ActiveModel {
        evaluation::ActiveModel {
            id: NotSet,
            technician_id: Set(self.technician_id),
            section_manager_id: Set(self.section_manager_id),
            description: Set(self.description),
            score: Set(self.score),
        }
    }
}
