use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One transfer per request; a second registration trips the unique key.
        manager
            .create_table(
                Table::create()
                    .table(Transfer::Table)
                    .if_not_exists()
                    .col(pk_auto(Transfer::Id))
                    .col(integer_uniq(Transfer::RequestId))
                    .col(integer_null(Transfer::ShippingSupervisorId))
                    .col(integer_null(Transfer::EquipmentReceptorId))
                    .col(date(Transfer::Date))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transfer-request_id")
                            .from(Transfer::Table, Transfer::RequestId)
                            .to(TransferRequest::Table, TransferRequest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transfer-shipping_supervisor_id")
                            .from(Transfer::Table, Transfer::ShippingSupervisorId)
                            .to(Employee::Table, Employee::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-transfer-equipment_receptor_id")
                            .from(Transfer::Table, Transfer::EquipmentReceptorId)
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
            .drop_table(Table::drop().table(Transfer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Transfer {
    Table,
    Id,
    RequestId,
    ShippingSupervisorId,
    EquipmentReceptorId,
    Date,
}

#[derive(DeriveIden)]
enum TransferRequest {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
}
