use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string(Equipment::Name))
                    .col(string(Equipment::Type))
                    .col(string(Equipment::Status))
                    .col(date(Equipment::DateOfAcquisition))
                    .col(integer(Equipment::DepartmentId))
                    .col(integer(Equipment::SectionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-equipment-department_id")
                            .from(Equipment::Table, Equipment::DepartmentId)
                            .to(Department::Table, Department::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Equipment {
    Table,
    Id,
    Name,
    Type,
    Status,
    DateOfAcquisition,
    DepartmentId,
    SectionId,
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
}
