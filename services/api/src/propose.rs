use std::path::PathBuf;

use capsule_stylist::config::AppConfig;
use capsule_stylist::error::AppError;
use capsule_stylist::wardrobe::{
    Capsule, ClimateProfile, Occasion, Outfit, OutfitEngine, WardrobeImporter,
    EMPTY_WARDROBE_HINT,
};
use clap::Args;
use serde::Serialize;

#[derive(Args, Debug)]
pub(crate) struct ProposeArgs {
    /// Wardrobe CSV export (name,category,color,fit,formality,warmth,price,tags)
    #[arg(long)]
    pub(crate) wardrobe: PathBuf,
    /// Occasion to dress for: casual, work, evening, formal or date
    #[arg(long, default_value = "work")]
    pub(crate) occasion: String,
    /// Override the configured typical temperature in Celsius
    #[arg(long)]
    pub(crate) temp_c: Option<f64>,
    /// Treat the day as rainy
    #[arg(long)]
    pub(crate) rainy: bool,
    /// Also print the capsule drawn from the top looks
    #[arg(long)]
    pub(crate) capsule: bool,
    /// Emit JSON instead of a text listing
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct ProposeOutput<'a> {
    occasion: Occasion,
    climate: ClimateProfile,
    outfits: &'a [Outfit],
    #[serde(skip_serializing_if = "Option::is_none")]
    capsule: Option<&'a Capsule>,
}

pub(crate) fn run_propose(args: ProposeArgs) -> Result<(), AppError> {
    let ProposeArgs {
        wardrobe,
        occasion,
        temp_c,
        rainy,
        capsule,
        json,
    } = args;

    let occasion = occasion.parse::<Occasion>()?;
    let styling = AppConfig::load()?.styling;
    let palette = styling.palette();
    let climate = ClimateProfile {
        typical_temp_c: temp_c.unwrap_or(styling.typical_temp_c),
        rainy: rainy || styling.rainy,
    };

    let garments = WardrobeImporter::from_path(&wardrobe)?;
    if garments.is_empty() {
        println!("{EMPTY_WARDROBE_HINT}");
        return Ok(());
    }

    let outfits = OutfitEngine::standard().propose(&garments, occasion, &palette, &climate);
    let capsule = capsule.then(|| Capsule::from_outfits(&outfits, styling.capsule_outfits));

    if json {
        let output = ProposeOutput {
            occasion,
            climate,
            outfits: &outfits,
            capsule: capsule.as_ref(),
        };
        match serde_json::to_string_pretty(&output) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => println!("JSON output unavailable: {err}"),
        }
        return Ok(());
    }

    render_outfits(&outfits, occasion, &climate, palette.season.as_str());
    if let Some(capsule) = &capsule {
        render_capsule(capsule);
    }

    Ok(())
}

fn render_outfits(outfits: &[Outfit], occasion: Occasion, climate: &ClimateProfile, season: &str) {
    println!(
        "Outfits for {} ({} palette, {:.1}C{})",
        occasion,
        season,
        climate.typical_temp_c,
        if climate.rainy { ", rainy" } else { "" }
    );

    if outfits.is_empty() {
        println!("- no outfit could be assembled from this wardrobe");
        return;
    }

    for (rank, outfit) in outfits.iter().enumerate() {
        println!(
            "{:>2}. [{:.2}] {} -> {}",
            rank + 1,
            outfit.score,
            outfit.notes,
            outfit.piece_names().join(", ")
        );
    }
}

fn render_capsule(capsule: &Capsule) {
    println!("\nCapsule ({} pieces)", capsule.len());
    for garment in &capsule.garments {
        println!(
            "- {} ({} {}, {})",
            garment.name,
            garment.color,
            garment.fit.label(),
            garment.category.code()
        );
    }
}
