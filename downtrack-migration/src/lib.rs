pub use sea_orm_migration::prelude::*;

mod m20241101_000001_create_employee_table;
mod m20241101_000002_create_section_table;
mod m20241101_000003_create_department_table;
mod m20241101_000004_create_equipment_table;
mod m20241101_000005_create_done_maintenance_table;
mod m20241101_000006_create_evaluation_table;
mod m20241101_000007_create_transfer_request_table;
mod m20241101_000008_create_transfer_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241101_000001_create_employee_table::Migration),
            Box::new(m20241101_000002_create_section_table::Migration),
            Box::new(m20241101_000003_create_department_table::Migration),
            Box::new(m20241101_000004_create_equipment_table::Migration),
            Box::new(m20241101_000005_create_done_maintenance_table::Migration),
            Box::new(m20241101_000006_create_evaluation_table::Migration),
            Box::new(m20241101_000007_create_transfer_request_table::Migration),
            Box::new(m20241101_000008_create_transfer_table::Migration),
        ]
    }
}
