use super::common::*;
use crate::wardrobe::domain::ColorPalette;
use crate::wardrobe::styling::PaletteScorer;

#[test]
fn duplicates_count_but_earn_no_variety_bonus() {
    let score = PaletteScorer.score(&["black", "black"], &palette());
    assert_eq!(score, 0.6);
}

#[test]
fn variety_bonus_applies_once() {
    let score = PaletteScorer.score(&["black", "navy", "black"], &palette());
    assert_eq!(score, 0.67);
}

#[test]
fn score_ignores_input_order() {
    let palette = palette();
    let forward = PaletteScorer.score(&["pink", "navy", "teal"], &palette);
    let reversed = PaletteScorer.score(&["teal", "navy", "pink"], &palette);
    assert_eq!(forward, reversed);
    assert_eq!(forward, 0.53);
}

#[test]
fn colors_in_both_sets_earn_both_weights() {
    let overlap = ColorPalette::new("odd", ["camel"], ["camel"]);
    assert_eq!(PaletteScorer.score(&["camel"], &overlap), 1.4);
}

#[test]
fn empty_color_list_scores_zero() {
    let empty: [&str; 0] = [];
    assert_eq!(PaletteScorer.score(&empty, &palette()), 0.0);
}
