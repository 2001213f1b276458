mod rules;
mod scoring;

pub use rules::{
    ColorRule, ContrastSilhouetteRule, FormalityOccasionRule, OccasionRule, PaletteColorRule,
    SilhouetteRule, WarmthWeatherRule, WeatherRule,
};
pub use scoring::PaletteScorer;

use super::domain::{Category, ClimateProfile, ColorPalette, Garment, Occasion, Outfit};
use scoring::round_score;
use tracing::debug;

/// Upper bound on the number of looks returned by a single proposal.
pub const MAX_PROPOSALS: usize = 12;

const OUTERWEAR_BONUS: f64 = 0.2;
const BAG_BONUS: f64 = 0.1;

/// Error surfaced before any outfit generation starts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StylingError {
    #[error("unknown occasion '{0}' (expected casual, work, evening, formal or date)")]
    UnknownOccasion(String),
}

/// Stateless engine enumerating, filtering, enriching and ranking looks.
///
/// The rules carry no state, so one engine can serve concurrent proposals.
pub struct OutfitEngine<
    C = PaletteColorRule,
    S = ContrastSilhouetteRule,
    O = FormalityOccasionRule,
    W = WarmthWeatherRule,
> {
    color: C,
    silhouette: S,
    occasion: O,
    weather: W,
    scorer: PaletteScorer,
}

impl OutfitEngine {
    pub fn standard() -> Self {
        Self::new(
            PaletteColorRule,
            ContrastSilhouetteRule,
            FormalityOccasionRule,
            WarmthWeatherRule,
        )
    }
}

impl Default for OutfitEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl<C, S, O, W> OutfitEngine<C, S, O, W>
where
    C: ColorRule,
    S: SilhouetteRule,
    O: OccasionRule,
    W: WeatherRule,
{
    pub fn new(color: C, silhouette: S, occasion: O, weather: W) -> Self {
        Self {
            color,
            silhouette,
            occasion,
            weather,
            scorer: PaletteScorer,
        }
    }

    /// Resolve the occasion key first, failing without partial results when it is unknown.
    pub fn propose_for_key(
        &self,
        garments: &[Garment],
        occasion_key: &str,
        palette: &ColorPalette,
        climate: &ClimateProfile,
    ) -> Result<Vec<Outfit>, StylingError> {
        let occasion = occasion_key.parse::<Occasion>()?;
        Ok(self.propose(garments, occasion, palette, climate))
    }

    pub fn propose(
        &self,
        garments: &[Garment],
        occasion: Occasion,
        palette: &ColorPalette,
        climate: &ClimateProfile,
    ) -> Vec<Outfit> {
        let buckets = CategoryBuckets::partition(garments);

        let mut candidates = self.dress_looks(&buckets, occasion, palette, climate);
        candidates.extend(self.separates_looks(&buckets, occasion, palette, climate));
        let generated = candidates.len();

        let mut enriched: Vec<Outfit> = candidates
            .iter()
            .map(|outfit| self.enrich(outfit, &buckets, palette, climate))
            .collect();

        // `sort_by` is stable, so equal scores keep generation order.
        enriched.sort_by(|left, right| right.score.total_cmp(&left.score));
        enriched.truncate(MAX_PROPOSALS);

        debug!(
            %occasion,
            garments = garments.len(),
            generated,
            returned = enriched.len(),
            "outfit proposal complete"
        );

        enriched
    }

    fn dress_looks(
        &self,
        buckets: &CategoryBuckets<'_>,
        occasion: Occasion,
        palette: &ColorPalette,
        climate: &ClimateProfile,
    ) -> Vec<Outfit> {
        let mut looks = Vec::new();
        for dress in buckets.get(Category::Dress) {
            for shoes in buckets.get(Category::Shoes) {
                let mut pieces = vec![(*dress).clone(), (*shoes).clone()];
                if let Some(bag) = buckets.first(Category::Bag) {
                    pieces.push(bag.clone());
                }

                if self.passes_filters(&pieces, occasion, climate) {
                    let score = self
                        .scorer
                        .score(&[dress.color.as_str(), shoes.color.as_str()], palette);
                    looks.push(Outfit {
                        pieces,
                        score,
                        notes: "dress look".to_string(),
                    });
                }
            }
        }
        looks
    }

    fn separates_looks(
        &self,
        buckets: &CategoryBuckets<'_>,
        occasion: Occasion,
        palette: &ColorPalette,
        climate: &ClimateProfile,
    ) -> Vec<Outfit> {
        let mut looks = Vec::new();
        for top in buckets.get(Category::Top) {
            for bottom in buckets.get(Category::Bottom) {
                if !self.silhouette.top_ok_with_bottom(top, bottom) {
                    continue;
                }
                if !self.color.compatible(&top.color, &bottom.color, palette) {
                    continue;
                }

                for shoes in buckets.get(Category::Shoes) {
                    let pieces = vec![(*top).clone(), (*bottom).clone(), (*shoes).clone()];
                    if self.passes_filters(&pieces, occasion, climate) {
                        let score = self.scorer.score(
                            &[
                                top.color.as_str(),
                                bottom.color.as_str(),
                                shoes.color.as_str(),
                            ],
                            palette,
                        );
                        looks.push(Outfit {
                            pieces,
                            score,
                            notes: "separates look".to_string(),
                        });
                    }
                }
            }
        }
        looks
    }

    fn passes_filters(
        &self,
        pieces: &[Garment],
        occasion: Occasion,
        climate: &ClimateProfile,
    ) -> bool {
        self.occasion.ok(pieces, occasion) && self.weather.ok(pieces, climate)
    }

    /// Outerwear is gated on color and weather; the bag is always appended when one exists.
    fn enrich(
        &self,
        outfit: &Outfit,
        buckets: &CategoryBuckets<'_>,
        palette: &ColorPalette,
        climate: &ClimateProfile,
    ) -> Outfit {
        let mut best = outfit.clone();

        if let (Some(outerwear), Some(lead)) =
            (buckets.first(Category::Outerwear), outfit.pieces.first())
        {
            if self.color.compatible(&outerwear.color, &lead.color, palette) {
                let mut pieces = outfit.pieces.clone();
                pieces.push(outerwear.clone());
                if self.weather.ok(&pieces, climate) {
                    best = Outfit {
                        pieces,
                        score: round_score(outfit.score + OUTERWEAR_BONUS),
                        notes: format!("{} + outerwear", outfit.notes),
                    };
                }
            }
        }

        if let Some(bag) = buckets.first(Category::Bag) {
            let mut pieces = best.pieces.clone();
            pieces.push(bag.clone());
            best = Outfit {
                pieces,
                score: round_score(best.score + BAG_BONUS),
                notes: format!("{} + bag", best.notes),
            };
        }

        best
    }
}

/// Garments grouped per category, preserving input order within each bucket.
struct CategoryBuckets<'a> {
    buckets: [Vec<&'a Garment>; 6],
}

impl<'a> CategoryBuckets<'a> {
    fn partition(garments: &'a [Garment]) -> Self {
        let mut buckets: [Vec<&'a Garment>; 6] = Default::default();
        for garment in garments {
            buckets[Self::slot(garment.category)].push(garment);
        }
        Self { buckets }
    }

    fn slot(category: Category) -> usize {
        match category {
            Category::Top => 0,
            Category::Bottom => 1,
            Category::Dress => 2,
            Category::Outerwear => 3,
            Category::Shoes => 4,
            Category::Bag => 5,
        }
    }

    fn get(&self, category: Category) -> &[&'a Garment] {
        &self.buckets[Self::slot(category)]
    }

    fn first(&self, category: Category) -> Option<&'a Garment> {
        self.get(category).first().copied()
    }
}
