use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Department::Table)
                    .if_not_exists()
                    .col(pk_auto(Department::Id))
                    .col(string(Department::Name))
                    .col(integer(Department::SectionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-department-section_id")
                            .from(Department::Table, Department::SectionId)
                            .to(Section::Table, Section::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-department-section_id-name")
                    .table(Department::Table)
                    .col(Department::SectionId)
                    .col(Department::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Department::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Department {
    Table,
    Id,
    Name,
    SectionId,
}

#[derive(DeriveIden)]
enum Section {
    Table,
    Id,
}
