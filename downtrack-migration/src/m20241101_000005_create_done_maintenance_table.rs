use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DoneMaintenance::Table)
                    .if_not_exists()
                    .col(pk_auto(DoneMaintenance::Id))
                    .col(integer_null(DoneMaintenance::TechnicianId))
                    .col(integer_null(DoneMaintenance::EquipmentId))
                    .col(string(DoneMaintenance::Type))
                    .col(double(DoneMaintenance::Cost))
                    .col(date(DoneMaintenance::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-done_maintenance-technician_id")
                            .from(DoneMaintenance::Table, DoneMaintenance::TechnicianId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-done_maintenance-equipment_id")
                            .from(DoneMaintenance::Table, DoneMaintenance::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DoneMaintenance::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DoneMaintenance {
    Table,
    Id,
    TechnicianId,
    EquipmentId,
    Type,
    Cost,
    Date,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
}
