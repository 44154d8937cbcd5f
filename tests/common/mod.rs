#![allow(dead_code)]

use chrono::NaiveDate;
use downtrack::{
    dto::{DepartmentDto, EmployeeDto, EquipmentDto, RoleProfile, SectionDto},
    entity::sea_orm_active_enums::EquipmentStatus,
    service::{DepartmentService, EmployeeService, EquipmentService, SectionService},
};
use downtrack_migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

pub struct TestContext {
    pub db: DatabaseConnection,
}

impl TestContext {
    /// A fresh in-memory database with every migration applied
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        Self { db }
    }

    pub async fn employee(&self, user_name: &str, role: RoleProfile) -> EmployeeDto {
        EmployeeService::create(&self.db, employee(user_name, role))
            .await
            .unwrap()
    }

    pub async fn manager(&self, user_name: &str) -> EmployeeDto {
        self.employee(user_name, RoleProfile::SectionManager).await
    }

    pub async fn technician(&self, user_name: &str) -> EmployeeDto {
        self.employee(
            user_name,
            RoleProfile::Technician {
                specialty: "Mechanical".to_owned(),
                salary: 1500.0,
                exp_years: 5,
            },
        )
        .await
    }

    pub async fn receptor(&self, user_name: &str, department: &DepartmentDto) -> EmployeeDto {
        self.employee(
            user_name,
            RoleProfile::EquipmentReceptor {
                department_id: Some(department.id),
                section_id: Some(department.section_id),
            },
        )
        .await
    }

    pub async fn section(&self, name: &str, manager: &EmployeeDto) -> SectionDto {
        SectionService::create(&self.db, section(name, manager.id))
            .await
            .unwrap()
    }

    pub async fn department(&self, name: &str, section: &SectionDto) -> DepartmentDto {
        DepartmentService::create(&self.db, department(name, section.id))
            .await
            .unwrap()
    }

    pub async fn equipment(&self, name: &str, department: &DepartmentDto) -> EquipmentDto {
        EquipmentService::create(&self.db, equipment(name, department))
            .await
            .unwrap()
    }
}

pub fn employee(user_name: &str, role: RoleProfile) -> EmployeeDto {
    EmployeeDto {
        id: 0,
        name: user_name.to_uppercase(),
        user_name: user_name.to_owned(),
        email: Some(format!("{user_name}@downtrack.local")),
        role,
    }
}

pub fn section(name: &str, section_manager_id: i32) -> SectionDto {
    SectionDto {
        id: 0,
        name: name.to_owned(),
        section_manager_id,
    }
}

pub fn department(name: &str, section_id: i32) -> DepartmentDto {
    DepartmentDto {
        id: 0,
        name: name.to_owned(),
        section_id,
    }
}

pub fn equipment(name: &str, department: &DepartmentDto) -> EquipmentDto {
    EquipmentDto {
        id: 0,
        name: name.to_owned(),
        r#type: "Machine".to_owned(),
        status: EquipmentStatus::Active,
        date_of_acquisition: date(2023, 5, 17),
        department_id: department.id,
        section_id: department.section_id,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
