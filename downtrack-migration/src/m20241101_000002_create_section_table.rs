use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The unique name constraint is the only atomic guard on section names.
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(pk_auto(Section::Id))
                    .col(string_uniq(Section::Name))
                    .col(integer(Section::SectionManagerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-section-section_manager_id")
                            .from(Section::Table, Section::SectionManagerId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Section::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Section {
    Table,
    Id,
    Name,
    SectionManagerId,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}
