use std::collections::HashSet;

use super::super::domain::ColorPalette;

const NEUTRAL_WEIGHT: f64 = 0.6;
const ACCENT_WEIGHT: f64 = 0.8;
const VARIETY_BONUS: f64 = 0.2;
const LENGTH_EPSILON: f64 = 1e-4;

/// Aesthetic score of a look's base colors against a palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteScorer;

impl PaletteScorer {
    /// Every occurrence counts, so duplicates weigh in; the variety bonus applies once.
    pub fn score<S: AsRef<str>>(&self, colors: &[S], palette: &ColorPalette) -> f64 {
        let mut total = 0.0;
        for color in colors {
            let color = color.as_ref();
            if palette.is_neutral(color) {
                total += NEUTRAL_WEIGHT;
            }
            if palette.is_accent(color) {
                total += ACCENT_WEIGHT;
            }
        }

        let distinct: HashSet<&str> = colors.iter().map(AsRef::as_ref).collect();
        if distinct.len() >= 2 {
            total += VARIETY_BONUS;
        }

        round_score(total / (colors.len() as f64 + LENGTH_EPSILON))
    }
}

pub(crate) fn round_score(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
