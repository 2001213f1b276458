use capsule_stylist::wardrobe::{GarmentEntry, RepositoryError, WardrobeRepository};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local wardrobe; garments keep insertion order.
#[derive(Default, Clone)]
pub(crate) struct InMemoryWardrobeRepository {
    entries: Arc<Mutex<Vec<GarmentEntry>>>,
}

impl WardrobeRepository for InMemoryWardrobeRepository {
    fn insert(&self, entry: GarmentEntry) -> Result<GarmentEntry, RepositoryError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Unavailable("wardrobe lock poisoned".to_string()))?;
        if guard.iter().any(|existing| existing.id == entry.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<GarmentEntry>, RepositoryError> {
        let guard = self
            .entries
            .lock()
            .map_err(|_| RepositoryError::Unavailable("wardrobe lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}
