use downtrack_entity::{employee, sea_orm_active_enums::UserRole};
use sea_orm::{ActiveValue::NotSet, IntoActiveModel, Set};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub user_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(flatten)]
    pub role: RoleProfile,
}

/// The role an employee holds, with the data only that role carries.
///
/// Serialized inline with the employee, tagged by `userRole`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "userRole")]
pub enum RoleProfile {
    Administrator,
    Director,
    SectionManager,
    ShippingSupervisor,
    #[serde(rename_all = "camelCase")]
    Technician {
        specialty: String,
        salary: f64,
        exp_years: i32,
    },
    /// The workplace reads `null` once its department has been deleted
    #[serde(rename_all = "camelCase")]
    EquipmentReceptor {
        department_id: Option<i32>,
        section_id: Option<i32>,
    },
}

impl RoleProfile {
    pub fn user_role(&self) -> UserRole {
        match self {
            Self::Administrator => UserRole::Administrator,
            Self::Director => UserRole::Director,
            Self::SectionManager => UserRole::SectionManager,
            Self::ShippingSupervisor => UserRole::ShippingSupervisor,
            Self::Technician { .. } => UserRole::Technician,
            Self::EquipmentReceptor { .. } => UserRole::EquipmentReceptor,
        }
    }

    fn from_model(model: &employee::Model) -> Self {
        match model.user_role {
            UserRole::Administrator => Self::Administrator,
            UserRole::Director => Self::Director,
            UserRole::SectionManager => Self::SectionManager,
            UserRole::ShippingSupervisor => Self::ShippingSupervisor,
            UserRole::Technician => Self::Technician {
                specialty: model.specialty.clone().unwrap_or_default(),
                salary: model.salary.unwrap_or_default(),
                exp_years: model.exp_years.unwrap_or_default(),
            },
            UserRole::EquipmentReceptor => Self::EquipmentReceptor {
                department_id: model.department_id,
                section_id: model.section_id,
            },
        }
    }
}

impl From<employee::Model> for EmployeeDto {
    fn from(model: employee::Model) -> Self {
        let role = RoleProfile::from_model(&model);
        Self {
            id: model.id,
            name: model.name,
            user_name: model.user_name,
            email: model.email,
            role,
        }
    }
}

impl IntoActiveModel<employee::ActiveModel> for EmployeeDto {
    fn into_active_model(self) -> employee::ActiveModel {
        let user_role = self.role.user_role();
        let (specialty, salary, exp_years) = match self.role {
            RoleProfile::Technician {
                ref specialty,
                salary,
                exp_years,
            } => (Some(specialty.clone()), Some(salary), Some(exp_years)),
            _ => (None, None, None),
        };
        let (department_id, section_id) = match self.role {
            RoleProfile::EquipmentReceptor {
                department_id,
                section_id,
            } => (department_id, section_id),
            _ => (None, None),
        };
        employee::ActiveModel {
            id: NotSet,
            name: Set(self.name),
            user_name: Set(self.user_name),
            email: Set(self.email),
            user_role: Set(user_role),
            specialty: Set(specialty),
            salary: Set(salary),
            exp_years: Set(exp_years),
            department_id: Set(department_id),
            section_id: Set(section_id),
        }
    }
}
