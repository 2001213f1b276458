use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::styling::StylingError;

/// Wardrobe slot a garment occupies within an outfit template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Top,
    Bottom,
    Dress,
    Outerwear,
    Shoes,
    Bag,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::Bottom,
        Category::Dress,
        Category::Outerwear,
        Category::Shoes,
        Category::Bag,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Top => "TOP",
            Category::Bottom => "BOTTOM",
            Category::Dress => "DRESS",
            Category::Outerwear => "OUTERWEAR",
            Category::Shoes => "SHOES",
            Category::Bag => "BAG",
        }
    }

    pub(crate) fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.code().eq_ignore_ascii_case(code.trim()))
    }
}

/// Cut of a garment, used when pairing tops with bottoms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    Fitted,
    Relaxed,
    Oversized,
    Tailored,
}

impl Fit {
    pub fn label(&self) -> &'static str {
        match self {
            Fit::Fitted => "fitted",
            Fit::Relaxed => "relaxed",
            Fit::Oversized => "oversized",
            Fit::Tailored => "tailored",
        }
    }

    pub(crate) fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "fitted" => Some(Fit::Fitted),
            "relaxed" => Some(Fit::Relaxed),
            "oversized" => Some(Fit::Oversized),
            "tailored" => Some(Fit::Tailored),
            _ => None,
        }
    }
}

/// Named context an outfit is assembled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Occasion {
    Casual,
    Work,
    Evening,
    Formal,
    Date,
}

impl Occasion {
    /// Minimum average formality an outfit must reach, before the tolerance band.
    pub fn min_formality(&self) -> i32 {
        match self {
            Occasion::Casual => 1,
            Occasion::Work => 3,
            Occasion::Evening => 3,
            Occasion::Formal => 4,
            Occasion::Date => 2,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Occasion::Casual => "casual",
            Occasion::Work => "work",
            Occasion::Evening => "evening",
            Occasion::Formal => "formal",
            Occasion::Date => "date",
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Occasion {
    type Err = StylingError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "casual" => Ok(Occasion::Casual),
            "work" => Ok(Occasion::Work),
            "evening" => Ok(Occasion::Evening),
            "formal" => Ok(Occasion::Formal),
            "date" => Ok(Occasion::Date),
            _ => Err(StylingError::UnknownOccasion(value.to_string())),
        }
    }
}

/// Immutable snapshot of one wardrobe item as the engine sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Garment {
    pub name: String,
    pub category: Category,
    pub color: String,
    pub fit: Fit,
    pub formality: i32,
    pub warmth: i32,
    pub price: f64,
    pub tags: Vec<String>,
}

impl Garment {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }
}

/// Seasonal palette used to judge color pairings and score looks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub season: String,
    pub neutrals: BTreeSet<String>,
    pub accents: BTreeSet<String>,
}

impl ColorPalette {
    pub fn new<N, A>(season: impl Into<String>, neutrals: N, accents: A) -> Self
    where
        N: IntoIterator,
        N::Item: AsRef<str>,
        A: IntoIterator,
        A::Item: AsRef<str>,
    {
        Self {
            season: season.into(),
            neutrals: normalize_colors(neutrals),
            accents: normalize_colors(accents),
        }
    }

    pub fn is_neutral(&self, color: &str) -> bool {
        self.neutrals.contains(color)
    }

    pub fn is_accent(&self, color: &str) -> bool {
        self.accents.contains(color)
    }
}

fn normalize_colors<I>(colors: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    colors
        .into_iter()
        .map(|color| color.as_ref().trim().to_lowercase())
        .filter(|color| !color.is_empty())
        .collect()
}

/// Typical weather the outfit has to cope with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClimateProfile {
    pub typical_temp_c: f64,
    #[serde(default)]
    pub rainy: bool,
}

/// Ranked look produced by the engine. Base pieces come first, enrichments after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub pieces: Vec<Garment>,
    pub score: f64,
    pub notes: String,
}

impl Outfit {
    pub fn piece_names(&self) -> Vec<&str> {
        self.pieces.iter().map(|piece| piece.name.as_str()).collect()
    }
}
