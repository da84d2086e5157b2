//! Contract tests for the Department API (/api/dept)
//!
//! Runs the real routing and handlers over in-memory storage and checks the
//! status codes and JSON shape clients depend on. Departments are
//! soft-deleted, which must be invisible through the API.

#[path = "../helpers/mod.rs"]
mod helpers;

use actix_web::{http::StatusCode, test, App};
use helpers::TestDataFactory;
use serde_json::{json, Value};
use simpledms::modules::{configure, Services};

#[actix_web::test]
async fn test_department_lifecycle_scenario() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    // create
    let req = test::TestRequest::post()
        .uri("/api/dept")
        .set_json(TestDataFactory::department_payload("SALES", "SEOUL"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let created: Value = test::read_body_json(resp).await;
    let dno = created["dno"].as_i64().expect("dno must be assigned");
    assert_eq!(created["dname"], "SALES");
    assert_eq!(created["loc"], "SEOUL");

    // search
    let req = test::TestRequest::get().uri("/api/dept?dname=SAL").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let found: Vec<Value> = test::read_body_json(resp).await;
    assert!(found.iter().any(|d| d["dno"] == dno));

    // delete
    let req = test::TestRequest::delete()
        .uri(&format!("/api/dept/deletion/{}", dno))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // gone
    let req = test::TestRequest::get()
        .uri(&format!("/api/dept/{}", dno))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_list_empty_returns_no_content() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    let req = test::TestRequest::get().uri("/api/dept").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(test::read_body(resp).await.is_empty());
}

#[actix_web::test]
async fn test_search_without_match_returns_no_content() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    let req = test::TestRequest::post()
        .uri("/api/dept")
        .set_json(TestDataFactory::department_payload("SALES", "SEOUL"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/api/dept?dname=sales").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_empty_search_parameter_matches_every_row() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    for (name, loc) in [("SALES", "SEOUL"), ("ACCOUNTING", "BUSAN")] {
        let req = test::TestRequest::post()
            .uri("/api/dept")
            .set_json(TestDataFactory::department_payload(name, loc))
            .to_request();
        test::call_service(&app, req).await;
    }

    let req = test::TestRequest::get().uri("/api/dept?dname=").to_request();
    let searched: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get().uri("/api/dept").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(searched.len(), 2);
    assert_eq!(searched, all);
}

#[actix_web::test]
async fn test_put_replaces_row_using_body_id() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    let req = test::TestRequest::post()
        .uri("/api/dept")
        .set_json(TestDataFactory::department_payload("SALES", "SEOUL"))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let dno = created["dno"].as_i64().unwrap();

    // path id deliberately differs from the body id
    let req = test::TestRequest::put()
        .uri("/api/dept/12345")
        .set_json(json!({ "dno": dno, "dname": "RESEARCH", "loc": "DALLAS" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["dno"], dno);
    assert_eq!(updated["dname"], "RESEARCH");
    assert_eq!(updated["loc"], "DALLAS");

    let req = test::TestRequest::get().uri("/api/dept").to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(all.len(), 1);
}

#[actix_web::test]
async fn test_delete_missing_returns_no_content() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    let req = test::TestRequest::delete()
        .uri("/api/dept/deletion/99999")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_delete_all_then_list_is_empty() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    let req = test::TestRequest::post()
        .uri("/api/dept")
        .set_json(TestDataFactory::department_payload("SALES", "SEOUL"))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::delete().uri("/api/dept/all").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/api/dept").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_web::test]
async fn test_client_timestamps_are_ignored() {
    let app = test::init_service(App::new().configure(configure(Services::in_memory()))).await;

    let req = test::TestRequest::post()
        .uri("/api/dept")
        .set_json(json!({
            "dname": "SALES",
            "loc": "SEOUL",
            "insertTime": "1999-01-01T00:00:00"
        }))
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;

    assert_ne!(created["insertTime"], "1999-01-01T00:00:00");
    assert!(created["insertTime"].is_string());
}
