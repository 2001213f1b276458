use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::config::StylingConfig;
use crate::wardrobe::router::{add_garment_handler, propose_handler, ProposalRequest};
use crate::wardrobe::service::StylistService;

fn json_request(uri: &str, body: serde_json::Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialisable body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn add_garment_route_returns_created_entry() {
    let (service, _) = build_service();
    let router = wardrobe_router_with_service(service);

    let response = router
        .oneshot(json_request(
            "/api/v1/wardrobe/garments",
            json!({
                "name": "Black tee",
                "category": "TOP",
                "color": "Black",
                "fit": "fitted",
                "formality": 3,
                "warmth": 2,
                "tags": "cotton, basics"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert!(payload.get("id").is_some());
    assert_eq!(payload.get("color"), Some(&json!("black")));
}

#[tokio::test]
async fn add_garment_handler_rejects_unknown_category() {
    let (service, _) = build_service();

    let response = add_garment_handler(
        State(Arc::new(service)),
        axum::Json(record("Scarf", "ACCESSORY", "red", "relaxed")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .contains("ACCESSORY"));
}

#[tokio::test]
async fn add_garment_handler_maps_conflicts() {
    let service = StylistService::new(Arc::new(ConflictRepository), StylingConfig::default());

    let response = add_garment_handler(
        State(Arc::new(service)),
        axum::Json(record("Tee", "TOP", "white", "fitted")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn list_route_returns_stored_garments() {
    let (service, _) = build_service();
    for record in work_basic_records() {
        service.add_garment(record).expect("garment stored");
    }
    let router = wardrobe_router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/wardrobe/garments")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn outfits_route_defaults_to_work() {
    let (service, _) = build_service();
    for record in work_basic_records() {
        service.add_garment(record).expect("garment stored");
    }
    let router = wardrobe_router_with_service(service);

    let response = router
        .oneshot(json_request("/api/v1/wardrobe/outfits", json!({ "capsule": true })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("occasion"), Some(&json!("work")));
    let outfits = payload
        .get("outfits")
        .and_then(serde_json::Value::as_array)
        .expect("outfits array");
    assert_eq!(outfits.len(), 1);
    assert_eq!(outfits[0].get("notes"), Some(&json!("separates look")));
    assert_eq!(outfits[0].get("score"), Some(&json!(0.67)));
    assert!(payload.get("capsule").is_some());
    assert!(payload.get("message").is_none());
}

#[tokio::test]
async fn propose_handler_rejects_unknown_occasion() {
    let (service, _) = build_service();

    let response = propose_handler(
        State(Arc::new(service)),
        axum::Json(ProposalRequest {
            occasion: "brunch".to_string(),
            capsule: false,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn propose_handler_reports_repository_outage() {
    let service = StylistService::new(Arc::new(UnavailableRepository), StylingConfig::default());

    let response = propose_handler(
        State(Arc::new(service)),
        axum::Json(ProposalRequest {
            occasion: "casual".to_string(),
            capsule: false,
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
