use serde::{Deserialize, Deserializer, Serialize};

use super::domain::{Category, Fit, Garment};

/// Loosely typed garment as persisted or submitted, before boundary validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentRecord {
    pub name: String,
    pub category: String,
    pub color: String,
    pub fit: String,
    #[serde(default = "default_formality")]
    pub formality: i32,
    #[serde(default = "default_warmth")]
    pub warmth: i32,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub price: Option<f64>,
    #[serde(default)]
    pub tags: String,
}

fn default_formality() -> i32 {
    3
}

fn default_warmth() -> i32 {
    2
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPrice {
        Number(f64),
        Text(String),
    }

    match Option::<RawPrice>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawPrice::Number(value)) => Ok(Some(value)),
        Some(RawPrice::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawPrice::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Boundary failure while turning a record into a typed garment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GarmentError {
    #[error("unknown garment category '{0}'")]
    UnknownCategory(String),
    #[error("unknown garment fit '{0}'")]
    UnknownFit(String),
}

impl TryFrom<&GarmentRecord> for Garment {
    type Error = GarmentError;

    fn try_from(record: &GarmentRecord) -> Result<Self, Self::Error> {
        let category = Category::from_code(&record.category)
            .ok_or_else(|| GarmentError::UnknownCategory(record.category.clone()))?;
        let fit =
            Fit::from_code(&record.fit).ok_or_else(|| GarmentError::UnknownFit(record.fit.clone()))?;

        Ok(Garment {
            name: record.name.clone(),
            category,
            color: record.color.trim().to_lowercase(),
            fit,
            formality: record.formality,
            warmth: record.warmth,
            price: record.price.unwrap_or(0.0),
            tags: split_tags(&record.tags),
        })
    }
}

impl TryFrom<GarmentRecord> for Garment {
    type Error = GarmentError;

    fn try_from(record: GarmentRecord) -> Result<Self, Self::Error> {
        Garment::try_from(&record)
    }
}

pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_tags_drops_blank_tokens() {
        assert_eq!(
            split_tags(" Sneaker, ,Suede ,, wool"),
            vec!["sneaker", "suede", "wool"]
        );
        assert!(split_tags("").is_empty());
    }

    #[test]
    fn price_accepts_numbers_and_blank_text() {
        let with_number: GarmentRecord = serde_json::from_str(
            r#"{"name":"Tee","category":"TOP","color":"White","fit":"fitted","price":19.5}"#,
        )
        .expect("record parses");
        assert_eq!(with_number.price, Some(19.5));
        assert_eq!(with_number.formality, 3);
        assert_eq!(with_number.warmth, 2);

        let blank: GarmentRecord = serde_json::from_str(
            r#"{"name":"Tee","category":"TOP","color":"White","fit":"fitted","price":""}"#,
        )
        .expect("record parses");
        assert_eq!(blank.price, None);
    }
}
