use super::super::domain::{ClimateProfile, ColorPalette, Fit, Garment, Occasion};

/// Decides whether two colors can be worn together under a palette.
pub trait ColorRule: Send + Sync {
    fn compatible(&self, a: &str, b: &str, palette: &ColorPalette) -> bool;
}

/// Decides whether a top's cut pairs with a bottom's cut.
pub trait SilhouetteRule: Send + Sync {
    fn top_ok_with_bottom(&self, top: &Garment, bottom: &Garment) -> bool;
}

/// Decides whether a set of pieces is formal enough for an occasion.
pub trait OccasionRule: Send + Sync {
    fn ok(&self, pieces: &[Garment], occasion: Occasion) -> bool;
}

/// Decides whether a set of pieces suits the climate.
pub trait WeatherRule: Send + Sync {
    fn ok(&self, pieces: &[Garment], climate: &ClimateProfile) -> bool;
}

const COMPLEMENTS: [(&str, &str); 5] = [
    ("navy", "rust"),
    ("black", "white"),
    ("beige", "forest"),
    ("pink", "olive"),
    ("red", "camel"),
];

/// Monochrome, palette neutrals, then the fixed complement pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteColorRule;

impl ColorRule for PaletteColorRule {
    fn compatible(&self, a: &str, b: &str, palette: &ColorPalette) -> bool {
        let a = a.trim().to_lowercase();
        let b = b.trim().to_lowercase();

        if a == b {
            return true;
        }
        if palette.is_neutral(&a) || palette.is_neutral(&b) {
            return true;
        }

        COMPLEMENTS
            .iter()
            .any(|&(left, right)| (a == left && b == right) || (a == right && b == left))
    }
}

/// Contrast-first pairing of cuts.
///
/// The checks run in a fixed order and are deliberately not symmetric: a tailored bottom
/// takes a fitted or tailored top, but a tailored top over an oversized bottom only passes
/// the final same-cut fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContrastSilhouetteRule;

impl SilhouetteRule for ContrastSilhouetteRule {
    fn top_ok_with_bottom(&self, top: &Garment, bottom: &Garment) -> bool {
        match (bottom.fit, top.fit) {
            (Fit::Relaxed | Fit::Oversized, Fit::Fitted) => true,
            (Fit::Fitted, Fit::Relaxed | Fit::Oversized) => true,
            (Fit::Tailored, Fit::Fitted | Fit::Tailored) => true,
            (bottom_fit, top_fit) => bottom_fit == top_fit,
        }
    }
}

const FORMALITY_TOLERANCE: f64 = 0.3;

/// Mean formality against the occasion threshold, with a sneaker veto for formal events.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormalityOccasionRule;

impl OccasionRule for FormalityOccasionRule {
    fn ok(&self, pieces: &[Garment], occasion: Occasion) -> bool {
        if pieces.is_empty() {
            return false;
        }

        let need = f64::from(occasion.min_formality());
        let total: f64 = pieces.iter().map(|piece| f64::from(piece.formality)).sum();
        let mean = total / pieces.len() as f64;

        if occasion == Occasion::Formal && pieces.iter().any(|piece| piece.has_tag("sneaker")) {
            return false;
        }

        mean >= need - FORMALITY_TOLERANCE
    }
}

const COLD_TEMP_C: f64 = 10.0;
const HOT_TEMP_C: f64 = 24.0;
const MIN_COLD_WARMTH: i64 = 6;
const MAX_HOT_WARMTH: i64 = 8;

/// Summed warmth against the temperature bands, plus a rain check on suede.
#[derive(Debug, Clone, Copy, Default)]
pub struct WarmthWeatherRule;

impl WeatherRule for WarmthWeatherRule {
    fn ok(&self, pieces: &[Garment], climate: &ClimateProfile) -> bool {
        let warmth: i64 = pieces.iter().map(|piece| i64::from(piece.warmth)).sum();

        if climate.typical_temp_c <= COLD_TEMP_C && warmth < MIN_COLD_WARMTH {
            return false;
        }
        if climate.typical_temp_c >= HOT_TEMP_C && warmth > MAX_HOT_WARMTH {
            return false;
        }
        if climate.rainy && pieces.iter().any(|piece| piece.has_tag("suede")) {
            return false;
        }

        true
    }
}
