use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::domain::{Garment, Outfit};

/// Number of top-ranked looks a capsule is drawn from unless configured otherwise.
pub const DEFAULT_CAPSULE_OUTFITS: usize = 6;

/// Deduplicated set of garments that carry the best-ranked looks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Capsule {
    pub garments: Vec<Garment>,
}

impl Capsule {
    /// Garments are keyed by name: the first sighting fixes the position, the last one the value.
    pub fn from_outfits(outfits: &[Outfit], limit: usize) -> Self {
        let mut garments: Vec<Garment> = Vec::new();
        let mut positions: HashMap<&str, usize> = HashMap::new();

        for piece in outfits.iter().take(limit).flat_map(|outfit| &outfit.pieces) {
            match positions.get(piece.name.as_str()) {
                Some(&index) => garments[index] = piece.clone(),
                None => {
                    positions.insert(piece.name.as_str(), garments.len());
                    garments.push(piece.clone());
                }
            }
        }

        Self { garments }
    }

    pub fn len(&self) -> usize {
        self.garments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.garments.is_empty()
    }
}
