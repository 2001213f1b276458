//! Wardrobe intake, outfit generation and capsule extraction.

pub mod capsule;
pub mod domain;
pub mod import;
pub mod record;
pub mod repository;
pub mod router;
pub mod service;
pub mod styling;

#[cfg(test)]
mod tests;

pub use capsule::{Capsule, DEFAULT_CAPSULE_OUTFITS};
pub use domain::{Category, ClimateProfile, ColorPalette, Fit, Garment, Occasion, Outfit};
pub use import::{WardrobeImportError, WardrobeImporter};
pub use record::{GarmentError, GarmentRecord};
pub use repository::{GarmentEntry, GarmentId, RepositoryError, WardrobeRepository};
pub use router::{wardrobe_router, ProposalRequest};
pub use service::{StylingProposal, StylistService, StylistServiceError, EMPTY_WARDROBE_HINT};
pub use styling::{OutfitEngine, PaletteScorer, StylingError, MAX_PROPOSALS};
