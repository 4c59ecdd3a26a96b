mod common;

use actix_web::{test, web, App};
use serde_json::Value;
use std::sync::Arc;

use common::{test_config, ScriptedTransport};
use instagram_gateway::{handlers, AppState};

macro_rules! gateway_app {
    ($transport:expr) => {{
        let state = AppState::new(test_config(), $transport.clone());
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(handlers::configure_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn health_reports_ok_with_timestamp() {
    let transport = Arc::new(ScriptedTransport::unreachable());
    let app = gateway_app!(transport);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], Value::String("OK".to_string()));
    // RFC3339 timestamps carry a date-time separator.
    assert!(body["timestamp"].as_str().unwrap().contains('T'));
}

#[actix_web::test]
async fn setup_guide_lists_steps_and_limitations() {
    let transport = Arc::new(ScriptedTransport::unreachable());
    let app = gateway_app!(transport);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/setup").to_request(),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert!(!body["steps"].as_array().unwrap().is_empty());
    assert!(!body["limitations"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn unmatched_route_returns_json_404() {
    let transport = Arc::new(ScriptedTransport::unreachable());
    let app = gateway_app!(transport);

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/api/nope").to_request(),
    )
    .await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], Value::String("Endpoint not found".to_string()));
}
