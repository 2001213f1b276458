use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::record::GarmentRecord;
use super::repository::{RepositoryError, WardrobeRepository};
use super::service::{StylistService, StylistServiceError};

/// Body accepted by the outfit proposal endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProposalRequest {
    #[serde(default = "default_occasion")]
    pub occasion: String,
    #[serde(default)]
    pub capsule: bool,
}

fn default_occasion() -> String {
    "work".to_string()
}

/// Router builder exposing HTTP endpoints for wardrobe intake and styling.
pub fn wardrobe_router<R>(service: Arc<StylistService<R>>) -> Router
where
    R: WardrobeRepository + 'static,
{
    Router::new()
        .route(
            "/api/v1/wardrobe/garments",
            post(add_garment_handler::<R>).get(list_garments_handler::<R>),
        )
        .route("/api/v1/wardrobe/outfits", post(propose_handler::<R>))
        .with_state(service)
}

pub(crate) async fn add_garment_handler<R>(
    State(service): State<Arc<StylistService<R>>>,
    axum::Json(record): axum::Json<GarmentRecord>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.add_garment(record) {
        Ok(entry) => (StatusCode::CREATED, axum::Json(entry)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_garments_handler<R>(
    State(service): State<Arc<StylistService<R>>>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.wardrobe() {
        Ok(entries) => (StatusCode::OK, axum::Json(entries)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn propose_handler<R>(
    State(service): State<Arc<StylistService<R>>>,
    axum::Json(request): axum::Json<ProposalRequest>,
) -> Response
where
    R: WardrobeRepository + 'static,
{
    match service.propose(&request.occasion, request.capsule) {
        Ok(proposal) => (StatusCode::OK, axum::Json(proposal)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: StylistServiceError) -> Response {
    let status = match &error {
        StylistServiceError::Styling(_) | StylistServiceError::Garment(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        StylistServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        StylistServiceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
