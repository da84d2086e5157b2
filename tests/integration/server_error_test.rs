// Storage failures over HTTP
//
// Every operation on every resource answers 500 with an empty body when the
// repository fails. No error detail leaks to the client.

#[path = "../helpers/mod.rs"]
mod helpers;

use std::sync::Arc;

use actix_web::{http::StatusCode, test, App};
use helpers::{FailingRepository, TestDataFactory};
use serde_json::Value;
use simpledms::core::AppError;
use simpledms::departments::Department;
use simpledms::employees::Employee;
use simpledms::faqs::Faq;
use simpledms::modules::{configure, Services};

fn failing_services() -> Services {
    Services::new(
        Arc::new(FailingRepository::<Department>::unreachable()),
        Arc::new(FailingRepository::<Employee>::unreachable()),
        Arc::new(FailingRepository::<Faq>::new(|| {
            AppError::internal("disk on fire")
        })),
    )
}

fn payload_for(path: &str) -> Value {
    match path {
        "/api/dept" => TestDataFactory::department_payload("SALES", "SEOUL"),
        "/api/emp" => TestDataFactory::employee_payload("SMITH", 20),
        _ => TestDataFactory::faq_payload("T", "C"),
    }
}

#[actix_web::test]
async fn test_every_operation_fails_with_bodiless_500() {
    let app = test::init_service(App::new().configure(configure(failing_services()))).await;

    for (path, search) in [
        ("/api/dept", "dname"),
        ("/api/emp", "ename"),
        ("/api/faq", "title"),
    ] {
        let requests = vec![
            test::TestRequest::get().uri(path).to_request(),
            test::TestRequest::get()
                .uri(&format!("{}?{}=x", path, search))
                .to_request(),
            test::TestRequest::get().uri(&format!("{}/1", path)).to_request(),
            test::TestRequest::post()
                .uri(path)
                .set_json(payload_for(path))
                .to_request(),
            test::TestRequest::put()
                .uri(&format!("{}/1", path))
                .set_json(payload_for(path))
                .to_request(),
            test::TestRequest::delete()
                .uri(&format!("{}/deletion/1", path))
                .to_request(),
            test::TestRequest::delete()
                .uri(&format!("{}/all", path))
                .to_request(),
        ];

        for req in requests {
            let label = format!("{} {}", req.method(), req.uri());
            let resp = test::call_service(&app, req).await;
            assert_eq!(
                resp.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{} should fail",
                label
            );
            assert!(test::read_body(resp).await.is_empty(), "{} leaked a body", label);
        }
    }
}

#[actix_web::test]
async fn test_health_is_unaffected_by_storage_failures() {
    let app = test::init_service(App::new().configure(configure(failing_services()))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
}
