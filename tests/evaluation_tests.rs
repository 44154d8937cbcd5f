pub mod common;

use common::TestContext;
use downtrack::{PagedRequest, ServiceError, dto::EvaluationDto, service::EvaluationService};
use pretty_assertions::assert_eq;

fn evaluation(technician_id: i32, section_manager_id: i32, score: i32) -> EvaluationDto {
    EvaluationDto {
        id: 0,
        technician_id,
        section_manager_id: Some(section_manager_id),
        description: "Regular".to_owned(),
        score,
    }
}

#[tokio::test]
async fn score_must_be_between_zero_and_ten() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let tom = ctx.technician("tom").await;

    for score in [-1, 11] {
        let err = EvaluationService::create(&ctx.db, evaluation(tom.id, manager.id, score))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)), "{err:?}");
    }
    for score in [0, 10] {
        EvaluationService::create(&ctx.db, evaluation(tom.id, manager.id, score))
            .await
            .unwrap();
    }
}

#[tokio::test]
async fn roles_of_both_parties_are_checked() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let tom = ctx.technician("tom").await;

    let swapped = EvaluationService::create(&ctx.db, evaluation(manager.id, tom.id, 5))
        .await
        .unwrap_err();
    assert!(matches!(swapped, ServiceError::Conflict(_)), "{swapped:?}");

    let mut anonymous = evaluation(tom.id, manager.id, 5);
    anonymous.section_manager_id = None;
    let err = EvaluationService::create(&ctx.db, anonymous).await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)), "{err:?}");
}

#[tokio::test]
async fn evaluations_are_paged_by_technician() {
    let ctx = TestContext::new().await;
    let manager = ctx.manager("marta").await;
    let tom = ctx.technician("tom").await;
    let tina = ctx.technician("tina").await;

    let first = EvaluationService::create(&ctx.db, evaluation(tom.id, manager.id, 7))
        .await
        .unwrap();
    EvaluationService::create(&ctx.db, evaluation(tina.id, manager.id, 9))
        .await
        .unwrap();
    let mut second = EvaluationService::create(&ctx.db, evaluation(tom.id, manager.id, 4))
        .await
        .unwrap();

    second.description = "Bad".to_owned();
    second.score = 2;
    let second = EvaluationService::update(&ctx.db, second).await.unwrap();

    let page = EvaluationService::paged_by_technician(&ctx.db, tom.id, PagedRequest::new(1, 10))
        .await
        .unwrap();
    assert_eq!(page.items, vec![first, second]);
}
