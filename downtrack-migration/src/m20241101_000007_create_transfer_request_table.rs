use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransferRequest::Table)
                    .if_not_exists()
                    .col(pk_auto(TransferRequest::Id))
                    .col(date(TransferRequest::Date))
                    .col(integer(TransferRequest::SectionManagerId))
                    .col(integer(TransferRequest::EquipmentId))
                    .col(integer(TransferRequest::SourceDepartmentId))
                    .col(integer(TransferRequest::SourceSectionId))
                    .col(integer(TransferRequest::ArrivalDepartmentId))
                    .col(integer(TransferRequest::ArrivalSectionId))
                    .col(string(TransferRequest::Status))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transfer_request-section_manager_id")
                            .from(TransferRequest::Table, TransferRequest::SectionManagerId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transfer_request-equipment_id")
                            .from(TransferRequest::Table, TransferRequest::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transfer_request-arrival_department_id")
                            .from(TransferRequest::Table, TransferRequest::ArrivalDepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransferRequest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TransferRequest {
    Table,
    Id,
    Date,
    SectionManagerId,
    EquipmentId,
    SourceDepartmentId,
    SourceSectionId,
    ArrivalDepartmentId,
    ArrivalSectionId,
    Status,
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

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
