use serde::{Deserialize, Serialize};

use super::record::GarmentRecord;

/// Identifier wrapper for stored garments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GarmentId(pub String);

/// Stored garment: the persisted record plus its identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentEntry {
    pub id: GarmentId,
    #[serde(flatten)]
    pub record: GarmentRecord,
}

/// Storage abstraction so the stylist service can be exercised in isolation.
pub trait WardrobeRepository: Send + Sync {
    fn insert(&self, entry: GarmentEntry) -> Result<GarmentEntry, RepositoryError>;
    fn list(&self) -> Result<Vec<GarmentEntry>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("garment already exists")]
    Conflict,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
