use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Evaluation::Table)
                    .if_not_exists()
                    .col(pk_auto(Evaluation::Id))
                    .col(integer(Evaluation::TechnicianId))
                    .col(integer_null(Evaluation::SectionManagerId))
                    .col(string(Evaluation::Description))
                    .col(integer(Evaluation::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation-technician_id")
                            .from(Evaluation::Table, Evaluation::TechnicianId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-evaluation-section_manager_id")
                            .from(Evaluation::Table, Evaluation::SectionManagerId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Evaluation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Evaluation {
    Table,
    Id,
    TechnicianId,
    SectionManagerId,
    Description,
    Score,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}
