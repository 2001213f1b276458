use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::capsule::Capsule;
use super::domain::{ClimateProfile, ColorPalette, Garment, Occasion, Outfit};
use super::record::{GarmentError, GarmentRecord};
use super::repository::{GarmentEntry, GarmentId, RepositoryError, WardrobeRepository};
use super::styling::{OutfitEngine, StylingError};
use crate::config::StylingConfig;

pub const EMPTY_WARDROBE_HINT: &str = "Add a few garments first (top/bottom/shoes or a dress).";

/// Result of a styling request: ranked looks, optional capsule and a user-facing hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylingProposal {
    pub occasion: Occasion,
    pub outfits: Vec<Outfit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capsule: Option<Capsule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Service composing the wardrobe repository, the outfit engine and the styling defaults.
pub struct StylistService<R> {
    repository: Arc<R>,
    engine: Arc<OutfitEngine>,
    palette: ColorPalette,
    climate: ClimateProfile,
    capsule_outfits: usize,
}

static GARMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_garment_id() -> GarmentId {
    let id = GARMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    GarmentId(format!("garment-{id:06}"))
}

impl<R> StylistService<R>
where
    R: WardrobeRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: StylingConfig) -> Self {
        Self {
            repository,
            engine: Arc::new(OutfitEngine::standard()),
            palette: config.palette(),
            climate: config.climate(),
            capsule_outfits: config.capsule_outfits,
        }
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    pub fn climate(&self) -> &ClimateProfile {
        &self.climate
    }

    /// Validate and store a garment. Color is stored lower-cased.
    pub fn add_garment(
        &self,
        mut record: GarmentRecord,
    ) -> Result<GarmentEntry, StylistServiceError> {
        record.color = record.color.trim().to_lowercase();
        Garment::try_from(&record)?;

        let entry = GarmentEntry {
            id: next_garment_id(),
            record,
        };
        let stored = self.repository.insert(entry)?;
        info!(id = %stored.id.0, name = %stored.record.name, "garment added to wardrobe");
        Ok(stored)
    }

    pub fn wardrobe(&self) -> Result<Vec<GarmentEntry>, StylistServiceError> {
        Ok(self.repository.list()?)
    }

    /// Propose ranked looks for an occasion key. An empty wardrobe is a hint, not an error.
    pub fn propose(
        &self,
        occasion_key: &str,
        include_capsule: bool,
    ) -> Result<StylingProposal, StylistServiceError> {
        let occasion = occasion_key.parse::<Occasion>()?;

        let garments = self
            .repository
            .list()?
            .iter()
            .map(|entry| Garment::try_from(&entry.record))
            .collect::<Result<Vec<_>, _>>()?;

        if garments.is_empty() {
            return Ok(StylingProposal {
                occasion,
                outfits: Vec::new(),
                capsule: None,
                message: Some(EMPTY_WARDROBE_HINT.to_string()),
            });
        }

        let outfits = self
            .engine
            .propose(&garments, occasion, &self.palette, &self.climate);
        let capsule =
            include_capsule.then(|| Capsule::from_outfits(&outfits, self.capsule_outfits));

        info!(
            %occasion,
            wardrobe = garments.len(),
            outfits = outfits.len(),
            capsule = capsule.as_ref().map(Capsule::len),
            "styling proposal ready"
        );

        Ok(StylingProposal {
            occasion,
            outfits,
            capsule,
            message: None,
        })
    }
}

/// Error raised by the stylist service.
#[derive(Debug, thiserror::Error)]
pub enum StylistServiceError {
    #[error(transparent)]
    Styling(#[from] StylingError),
    #[error(transparent)]
    Garment(#[from] GarmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
