use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string(Employee::Name))
                    .col(string_uniq(Employee::UserName))
                    .col(string_null(Employee::Email))
                    .col(string(Employee::UserRole))
                    .col(string_null(Employee::Specialty))
                    .col(double_null(Employee::Salary))
                    .col(integer_null(Employee::ExpYears))
                    .col(integer_null(Employee::DepartmentId))
                    .col(integer_null(Employee::SectionId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-employee-user_role")
                    .table(Employee::Table)
                    .col(Employee::UserRole)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    Name,
    UserName,
    Email,
    UserRole,
    Specialty,
    Salary,
    ExpYears,
    DepartmentId,
    SectionId,
}
