pub mod common;

use common::{TestContext, date};
use downtrack::{
    PagedRequest, ServiceError,
    dto::DoneMaintenanceDto,
    service::{EquipmentService, MaintenanceService},
};
use pretty_assertions::assert_eq;

fn maintenance(technician_id: i32, equipment_id: i32) -> DoneMaintenanceDto {
    DoneMaintenanceDto {
        id: 0,
        technician_id: Some(technician_id),
        equipment_id: Some(equipment_id),
        r#type: "Calibration".to_owned(),
        cost: 120.5,
        date: date(2024, 6, 10),
    }
}

#[tokio::test]
async fn maintenance_is_performed_by_a_technician_on_existing_equipment() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant = ctx.section("Plant-A", &manager).await;
    let line = ctx.department("Line-1", &plant).await;
    let lathe = ctx.equipment("Lathe", &line).await;
    let tom = ctx.technician("tom").await;

    let err = MaintenanceService::create(&ctx.db, maintenance(manager.id, lathe.id))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");

    let err = MaintenanceService::create(&ctx.db, maintenance(tom.id, 404))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");

    let mut incomplete = maintenance(tom.id, lathe.id);
    incomplete.equipment_id = None;
    let err = MaintenanceService::create(&ctx.db, incomplete).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)), "{err:?}");

    let created = MaintenanceService::create(&ctx.db, maintenance(tom.id, lathe.id))
        .await
        .unwrap();
    assert_eq!(
        MaintenanceService::get_by_id(&ctx.db, created.id).await.unwrap(),
        created
    );
}

#[tokio::test]
async fn maintenance_is_paged_by_technician_and_equipment() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant = ctx.section("Plant-A", &manager).await;
    let line = ctx.department("Line-1", &plant).await;
    let lathe = ctx.equipment("Lathe", &line).await;
    let press = ctx.equipment("Press", &line).await;
    let tom = ctx.technician("tom").await;
    let tina = ctx.technician("tina").await;

    let first = MaintenanceService::create(&ctx.db, maintenance(tom.id, lathe.id))
        .await
        .unwrap();
    MaintenanceService::create(&ctx.db, maintenance(tina.id, lathe.id))
        .await
        .unwrap();
    let third = MaintenanceService::create(&ctx.db, maintenance(tom.id, press.id))
        .await
        .unwrap();

    let by_tom = MaintenanceService::paged_by_technician(&ctx.db, tom.id, PagedRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(by_tom.items, vec![first, third]);

    let on_lathe =
        MaintenanceService::paged_by_equipment(&ctx.db, lathe.id, PagedRequest::new(1, 10))
            .await
            .unwrap();
    assert_eq!(on_lathe.total_count, 2);
}

#[tokio::test]
async fn deleting_equipment_keeps_maintenance_history() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant = ctx.section("Plant-A", &manager).await;
    let line = ctx.department("Line-1", &plant).await;
    let lathe = ctx.equipment("Lathe", &line).await;
    let tom = ctx.technician("tom").await;
    let record = MaintenanceService::create(&ctx.db, maintenance(tom.id, lathe.id))
        .await
        .unwrap();

    EquipmentService::delete(&ctx.db, lathe.id).await.unwrap();

    let record = MaintenanceService::get_by_id(&ctx.db, record.id).await.unwrap();
    assert_eq!(record.equipment_id, None);
    assert_eq!(record.technician_id, Some(tom.id));
}

#[tokio::test]
async fn update_and_delete_need_an_existing_record() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant = ctx.section("Plant-A", &manager).await;
    let line = ctx.department("Line-1", &plant).await;
    let lathe = ctx.equipment("Lathe", &line).await;
    let tom = ctx.technician("tom").await;

    let mut ghost = maintenance(tom.id, lathe.id);
    ghost.id = 77;
    assert!(matches!(
        MaintenanceService::update(&ctx.db, ghost).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(matches!(
        MaintenanceService::delete(&ctx.db, 77).await,
        Err(ServiceError::NotFound(_))
    ));

    let mut record = MaintenanceService::create(&ctx.db, maintenance(tom.id, lathe.id))
        .await
        .unwrap();
    record.cost = 300.0;
    assert_eq!(
        MaintenanceService::update(&ctx.db, record.clone()).await.unwrap(),
        record
    );
    MaintenanceService::delete(&ctx.db, record.id).await.unwrap();
    assert!(MaintenanceService::list(&ctx.db).await.unwrap().is_empty());
}
