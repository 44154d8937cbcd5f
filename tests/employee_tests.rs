pub mod common;

use common::{TestContext, date, employee};
use downtrack::{
    PagedRequest, ServiceError,
    dto::{DoneMaintenanceDto, EvaluationDto, RoleProfile},
    entity::sea_orm_active_enums::UserRole,
    service::{EmployeeService, EvaluationService, MaintenanceService},
};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn create_then_get_keeps_the_role_profile() {
    let ctx = TestContext::new().await;

    let created = ctx.technician("tom").await;
    let fetched = EmployeeService::get_by_id(&ctx.db, created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(
        fetched.role,
        RoleProfile::Technician {
            specialty: "Mechanical".to_owned(),
            salary: 1500.0,
            exp_years: 5,
        }
    );
}

#[tokio::test]
async fn user_names_are_unique() {
    let ctx = TestContext::new().await;
    ctx.manager("marta").await;

    let err = EmployeeService::create(&ctx.db, employee("marta", RoleProfile::Director))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");
}

#[tokio::test]
async fn receptor_must_work_in_a_department_of_its_section() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant_a = ctx.section("Plant-A", &manager).await;
    let plant_b = ctx.section("Plant-B", &manager).await;
    let line = ctx.department("Line-1", &plant_a).await;

    let misplaced = employee(
        "rita",
        RoleProfile::EquipmentReceptor {
            department_id: Some(line.id),
            section_id: Some(plant_b.id),
        },
    );
    let err = EmployeeService::create(&ctx.db, misplaced).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");

    let homeless = employee(
        "rita",
        RoleProfile::EquipmentReceptor {
            department_id: None,
            section_id: None,
        },
    );
    let err = EmployeeService::create(&ctx.db, homeless).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)), "{err:?}");

    let receptor = ctx.receptor("rita", &line).await;
    assert_eq!(receptor.role.user_role(), UserRole::EquipmentReceptor);
}

#[tokio::test]
async fn deleting_a_technician_keeps_maintenance_history() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant = ctx.section("Plant-A", &manager).await;
    let line = ctx.department("Line-1", &plant).await;
    let lathe = ctx.equipment("Lathe", &line).await;
    let technician = ctx.technician("tom").await;

    let record = MaintenanceService::create(
        &ctx.db,
        DoneMaintenanceDto {
            id: 0,
            technician_id: Some(technician.id),
            equipment_id: Some(lathe.id),
            r#type: "Lubrication".to_owned(),
            cost: 80.0,
            date: date(2024, 3, 1),
        },
    )
    .await
    .unwrap();
    EvaluationService::create(
        &ctx.db,
        EvaluationDto {
            id: 0,
            technician_id: technician.id,
            section_manager_id: Some(manager.id),
            description: "Good".to_owned(),
            score: 8,
        },
    )
    .await
    .unwrap();

    EmployeeService::delete(&ctx.db, technician.id).await.unwrap();

    let record = MaintenanceService::get_by_id(&ctx.db, record.id).await.unwrap();
    assert_eq!(record.technician_id, None);
    assert_eq!(record.equipment_id, Some(lathe.id));
    assert!(EvaluationService::list(&ctx.db).await.unwrap().is_empty());
    assert!(matches!(
        EmployeeService::get_by_id(&ctx.db, technician.id).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn managers_of_a_section_cannot_be_removed_or_demoted() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    ctx.section("Plant-A", &manager).await;

    let err = EmployeeService::delete(&ctx.db, manager.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");

    let mut demoted = manager.clone();
    demoted.role = RoleProfile::Director;
    let err = EmployeeService::update(&ctx.db, demoted).await.unwrap_err();
    assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");

    assert_eq!(
        EmployeeService::get_by_id(&ctx.db, manager.id).await.unwrap(),
        manager
    );
}

#[tokio::test]
async fn technicians_with_history_keep_their_role() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let plant = ctx.section("Plant-A", &manager).await;
    let line = ctx.department("Line-1", &plant).await;
    let lathe = ctx.equipment("Lathe", &line).await;
    let tom = ctx.technician("tom").await;
    let tina = ctx.technician("tina").await;

    MaintenanceService::create(
        &ctx.db,
        DoneMaintenanceDto {
            id: 0,
            technician_id: Some(tom.id),
            equipment_id: Some(lathe.id),
            r#type: "Lubrication".to_owned(),
            cost: 80.0,
            date: date(2024, 3, 1),
        },
    )
    .await
    .unwrap();
    EvaluationService::create(
        &ctx.db,
        EvaluationDto {
            id: 0,
            technician_id: tina.id,
            section_manager_id: Some(manager.id),
            description: "Good".to_owned(),
            score: 8,
        },
    )
    .await
    .unwrap();

    for technician in [&tom, &tina] {
        let mut promoted = technician.clone();
        promoted.role = RoleProfile::Director;
        let err = EmployeeService::update(&ctx.db, promoted).await.unwrap_err();
        assert!(matches!(err, ServiceError::Conflict(_)), "{err:?}");
        assert_eq!(
            EmployeeService::get_by_id(&ctx.db, technician.id).await.unwrap(),
            *technician
        );
    }

    let mut raised = tom.clone();
    raised.role = RoleProfile::Technician {
        specialty: "Hydraulic".to_owned(),
        salary: 2000.0,
        exp_years: 6,
    };
    assert_eq!(
        EmployeeService::update(&ctx.db, raised.clone()).await.unwrap(),
        raised
    );
}

#[tokio::test]
async fn changing_role_clears_the_old_payload() {
    let ctx = TestContext::new().await;
    let mut tom = ctx.technician("tom").await;

    tom.role = RoleProfile::ShippingSupervisor;
    let updated = EmployeeService::update(&ctx.db, tom.clone()).await.unwrap();

    assert_eq!(updated, tom);
}

#[tokio::test]
async fn employees_are_paged_by_role() {
    let ctx = TestContext::new().await;
    ctx.manager("marta").await;
    let tom = ctx.technician("tom").await;
    ctx.employee("dora", RoleProfile::Director).await;
    let tina = ctx.technician("tina").await;

    let page = EmployeeService::technicians_paged(&ctx.db, PagedRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
    assert_eq!(page.items, vec![tom, tina]);

    let page = EmployeeService::paged_by_role(&ctx.db, UserRole::Director, PagedRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].user_name, "dora");
}

#[tokio::test]
async fn deleting_an_unknown_employee_is_not_found() {
    let ctx = TestContext::new().await;

    assert!(matches!(
        EmployeeService::delete(&ctx.db, 5).await,
        Err(ServiceError::NotFound(_))
    ));
}
