pub mod common;

use common::{TestContext, department, section};
use downtrack::{
    UnitOfWork,
    entity::{department as department_entity, section as section_entity},
    service::{DepartmentService, SectionService},
};
use pretty_assertions::assert_eq;
use sea_orm::IntoActiveModel;

#[tokio::test]
async fn dropped_unit_of_work_leaves_nothing_behind() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;

    {
        let uow = UnitOfWork::begin(&ctx.db).await.unwrap();
        uow.repository::<section_entity::Entity>()
            .create(section("Plant-A", manager.id).into_active_model())
            .await
            .unwrap();
    }

    assert!(SectionService::list(&ctx.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn aborted_unit_of_work_leaves_nothing_behind() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;

    let uow = UnitOfWork::begin(&ctx.db).await.unwrap();
    uow.repository::<section_entity::Entity>()
        .create(section("Plant-A", manager.id).into_active_model())
        .await
        .unwrap();
    uow.abort().await.unwrap();

    assert!(SectionService::list(&ctx.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn repositories_share_one_transaction() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;

    let uow = UnitOfWork::begin(&ctx.db).await.unwrap();
    let plant = uow
        .repository::<section_entity::Entity>()
        .create(section("Plant-A", manager.id).into_active_model())
        .await
        .unwrap();
    let line = uow
        .repository::<department_entity::Entity>()
        .create(department("Line-1", plant.id).into_active_model())
        .await
        .unwrap();
    let staged = uow
        .repository::<department_entity::Entity>()
        .get_by_id(line.id)
        .await
        .unwrap();
    assert_eq!(staged.as_ref(), Some(&line));
    uow.complete().await.unwrap();

    let stored = DepartmentService::get_by_id(&ctx.db, line.id).await.unwrap();
    assert_eq!(stored.name, "Line-1");
    let departments = SectionService::departments_of(&ctx.db, plant.id).await.unwrap();
    assert_eq!(departments, vec![stored]);
}

#[tokio::test]
async fn a_failed_write_undoes_the_earlier_ones() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;

    let uow = UnitOfWork::begin(&ctx.db).await.unwrap();
    uow.repository::<section_entity::Entity>()
        .create(section("Plant-A", manager.id).into_active_model())
        .await
        .unwrap();
    let dangling = uow
        .repository::<department_entity::Entity>()
        .create(department("Line-1", 404).into_active_model())
        .await;
    assert!(dangling.is_err());
    drop(uow);

    assert!(SectionService::list(&ctx.db).await.unwrap().is_empty());
    assert!(DepartmentService::list(&ctx.db).await.unwrap().is_empty());
}
