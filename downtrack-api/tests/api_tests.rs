use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use downtrack_api::app;
use downtrack_migration::{Migrator, MigratorTrait};
use pretty_assertions::assert_eq;
use sea_orm::Database;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let conn = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&conn, None).await.unwrap();
    app(conn)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "localhost:8000");
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn manager(app: &Router, user_name: &str) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/Employee/POST",
        Some(json!({
            "name": "Marta",
            "userName": user_name,
            "userRole": "SectionManager",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["id"].as_i64().unwrap()
}

#[tokio::test]
async fn health_reports_a_live_database() {
    let app = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn sections_round_trip_through_http() {
    let app = test_app().await;
    let manager_id = manager(&app, "marta").await;

    let (status, created) = send(
        &app,
        Method::POST,
        "/api/Section/POST",
        Some(json!({ "name": "Plant-A", "sectionManagerId": manager_id })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{created}");
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, Method::GET, &format!("/api/Section/GET?sectionId={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/Section/DELETE?sectionId={id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/api/Section/GET?sectionId={id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn service_errors_become_status_codes() {
    let app = test_app().await;
    let manager_id = manager(&app, "marta").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/Employee/POST",
        Some(json!({ "name": "Marta", "userName": "marta", "userRole": "Director" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/Section/POST",
        Some(json!({ "name": "", "sectionManagerId": manager_id })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/Section/GetPaged?PageNumber=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::GET, "/api/Section/GetPaged?PageSize=ten", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn paged_listings_link_to_absolute_urls() {
    let app = test_app().await;
    let manager_id = manager(&app, "marta").await;
    for name in ["Plant-A", "Plant-B", "Plant-C"] {
        let (status, _) = send(
            &app,
            Method::POST,
            "/api/Section/POST",
            Some(json!({ "name": name, "sectionManagerId": manager_id })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, page) = send(
        &app,
        Method::GET,
        "/api/Section/GetPaged?PageNumber=1&PageSize=2",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["totalCount"], 3);
    assert_eq!(page["items"].as_array().unwrap().len(), 2);
    assert_eq!(
        page["nextPageUrl"],
        "http://localhost:8000/api/Section/GetPaged?pageNumber=2&pageSize=2"
    );
    assert_eq!(page["previousPageUrl"], Value::Null);

    let (status, page) = send(
        &app,
        Method::GET,
        &format!("/api/Section/sections/section-manager/{manager_id}?pageNumber=2&pageSize=2"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["items"][0]["name"], "Plant-C");
    assert_eq!(
        page["previousPageUrl"],
        format!(
            "http://localhost:8000/api/Section/sections/section-manager/{manager_id}?pageNumber=1&pageSize=2"
        )
    );
}

#[tokio::test]
async fn employees_carry_their_role_inline() {
    let app = test_app().await;

    let (status, technician) = send(
        &app,
        Method::POST,
        "/api/Employee/POST",
        Some(json!({
            "name": "Tom",
            "userName": "tom",
            "email": "tom@downtrack.local",
            "userRole": "Technician",
            "specialty": "Electrical",
            "salary": 1800.0,
            "expYears": 7,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{technician}");
    assert_eq!(technician["userRole"], "Technician");
    assert_eq!(technician["expYears"], 7);

    let (status, page) = send(&app, Method::GET, "/api/Employee/Technicians", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["items"], json!([technician]));
}

#[tokio::test]
async fn huge_page_numbers_yield_an_empty_page() {
    let app = test_app().await;
    manager(&app, "marta").await;

    let (status, page) = send(
        &app,
        Method::GET,
        "/api/Employee/GetPaged?PageNumber=9223372036854775807&PageSize=10",
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK, "{page}");
    assert_eq!(page["items"], json!([]));
    assert_eq!(page["totalCount"], 1);
    assert_eq!(page["nextPageUrl"], Value::Null);
}
