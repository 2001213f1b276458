use std::io::Read;
use std::path::Path;

use super::domain::Garment;
use super::record::{GarmentError, GarmentRecord};

#[derive(Debug)]
pub enum WardrobeImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Garment { row: usize, source: GarmentError },
}

impl std::fmt::Display for WardrobeImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WardrobeImportError::Io(err) => write!(f, "failed to read wardrobe export: {}", err),
            WardrobeImportError::Csv(err) => write!(f, "invalid wardrobe CSV data: {}", err),
            WardrobeImportError::Garment { row, source } => {
                write!(f, "wardrobe row {} rejected: {}", row, source)
            }
        }
    }
}

impl std::error::Error for WardrobeImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WardrobeImportError::Io(err) => Some(err),
            WardrobeImportError::Csv(err) => Some(err),
            WardrobeImportError::Garment { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for WardrobeImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for WardrobeImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Reads a wardrobe export with `name,category,color,fit,formality,warmth,price,tags` headers.
pub struct WardrobeImporter;

impl WardrobeImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Garment>, WardrobeImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Garment>, WardrobeImportError> {
        parse_records(reader)?
            .iter()
            .enumerate()
            .map(|(index, record)| {
                Garment::try_from(record).map_err(|source| WardrobeImportError::Garment {
                    row: index + 1,
                    source,
                })
            })
            .collect()
    }
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<GarmentRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.deserialize::<GarmentRecord>().collect()
}
