use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::config::StylingConfig;
use crate::wardrobe::domain::{Category, ClimateProfile, ColorPalette, Fit, Garment};
use crate::wardrobe::record::GarmentRecord;
use crate::wardrobe::repository::{GarmentEntry, RepositoryError, WardrobeRepository};
use crate::wardrobe::router::wardrobe_router;
use crate::wardrobe::service::StylistService;

pub(super) fn palette() -> ColorPalette {
    ColorPalette::new(
        "spring",
        ["black", "white", "beige", "camel", "navy", "ivory"],
        ["pink", "red", "olive", "rust", "forest"],
    )
}

pub(super) fn mild_climate() -> ClimateProfile {
    ClimateProfile {
        typical_temp_c: 18.0,
        rainy: false,
    }
}

pub(super) fn garment(
    name: &str,
    category: Category,
    color: &str,
    fit: Fit,
    formality: i32,
    warmth: i32,
) -> Garment {
    Garment {
        name: name.to_string(),
        category,
        color: color.to_string(),
        fit,
        formality,
        warmth,
        price: 0.0,
        tags: Vec::new(),
    }
}

pub(super) fn tagged(mut garment: Garment, tags: &[&str]) -> Garment {
    garment.tags = tags.iter().map(|tag| tag.to_string()).collect();
    garment
}

pub(super) fn fitted(name: &str, category: Category, color: &str) -> Garment {
    garment(name, category, color, Fit::Fitted, 3, 2)
}

/// Black fitted top, navy relaxed bottom and black shoes: one valid work look.
pub(super) fn work_basics() -> Vec<Garment> {
    vec![
        garment("Black tee", Category::Top, "black", Fit::Fitted, 3, 2),
        garment("Navy chinos", Category::Bottom, "navy", Fit::Relaxed, 3, 2),
        garment("Black loafers", Category::Shoes, "black", Fit::Fitted, 3, 1),
    ]
}

pub(super) fn record(name: &str, category: &str, color: &str, fit: &str) -> GarmentRecord {
    GarmentRecord {
        name: name.to_string(),
        category: category.to_string(),
        color: color.to_string(),
        fit: fit.to_string(),
        formality: 3,
        warmth: 2,
        price: Some(49.0),
        tags: String::new(),
    }
}

pub(super) fn work_basic_records() -> Vec<GarmentRecord> {
    let mut shoes = record("Black loafers", "SHOES", "Black", "fitted");
    shoes.warmth = 1;
    vec![
        record("Black tee", "TOP", "Black", "fitted"),
        record("Navy chinos", "BOTTOM", "NAVY", "relaxed"),
        shoes,
    ]
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    entries: Arc<Mutex<Vec<GarmentEntry>>>,
}

impl WardrobeRepository for MemoryRepository {
    fn insert(&self, entry: GarmentEntry) -> Result<GarmentEntry, RepositoryError> {
        let mut guard = self.entries.lock().expect("repository mutex poisoned");
        if guard.iter().any(|existing| existing.id == entry.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<GarmentEntry>, RepositoryError> {
        Ok(self
            .entries
            .lock()
            .expect("repository mutex poisoned")
            .clone())
    }
}

pub(super) struct ConflictRepository;

impl WardrobeRepository for ConflictRepository {
    fn insert(&self, _entry: GarmentEntry) -> Result<GarmentEntry, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn list(&self) -> Result<Vec<GarmentEntry>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

impl WardrobeRepository for UnavailableRepository {
    fn insert(&self, _entry: GarmentEntry) -> Result<GarmentEntry, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }

    fn list(&self) -> Result<Vec<GarmentEntry>, RepositoryError> {
        Err(RepositoryError::Unavailable("offline".to_string()))
    }
}

pub(super) fn build_service() -> (StylistService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = StylistService::new(Arc::new(repository.clone()), StylingConfig::default());
    (service, repository)
}

pub(super) fn wardrobe_router_with_service(
    service: StylistService<MemoryRepository>,
) -> axum::Router {
    wardrobe_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
