//! Startup loading of the shipment table and the province boundaries.
//!
//! Both inputs are read once; the resulting [`Dataset`] is immutable and
//! shared by reference for the life of the process.

use csv::{ReaderBuilder, Trim};
use geojson::{Feature, GeoJson};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use crate::error::{DataError, Result};
use crate::models::{CsvRecord, Shipment};

/// Province name to boundary feature
#[derive(Debug, Clone)]
pub struct Boundaries {
    property_path: String,
    features: BTreeMap<String, Feature>,
}

impl Boundaries {
    /// Parse a GeoJSON `FeatureCollection`, keying each feature by the
    /// string found at `property_path` inside its properties
    /// (`NAME_1`, or a dotted path for nested objects).
    pub fn from_geojson_str(source: &str, property_path: &str) -> Result<Self> {
        let property_path = property_path
            .strip_prefix("properties.")
            .unwrap_or(property_path)
            .to_string();

        let collection = match source.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(fc) => fc,
            _ => return Err(DataError::NotFeatureCollection),
        };

        let mut features = BTreeMap::new();
        let mut unnamed = 0;
        for feature in collection.features {
            match property_at(&feature, &property_path) {
                Some(name) => {
                    let name = name.to_string();
                    if features.insert(name.clone(), feature).is_some() {
                        warn!("Duplicate boundary for '{}', keeping the last one", name);
                    }
                }
                None => unnamed += 1,
            }
        }
        if unnamed > 0 {
            warn!(
                "{} boundary features have no '{}' property and were skipped",
                unnamed, property_path
            );
        }

        Ok(Self {
            property_path,
            features,
        })
    }

    pub fn from_path(path: &Path, property_path: &str) -> Result<Self> {
        let mut source = String::new();
        File::open(path)
            .and_then(|mut f| f.read_to_string(&mut source))
            .map_err(|source| DataError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_geojson_str(&source, property_path)
    }

    pub fn get(&self, province: &str) -> Option<&Feature> {
        self.features.get(province)
    }

    pub fn contains(&self, province: &str) -> bool {
        self.features.contains_key(province)
    }

    /// Key the renderer uses to match locations to features
    pub fn feature_id_key(&self) -> String {
        format!("properties.{}", self.property_path)
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

fn property_at<'a>(feature: &'a Feature, path: &str) -> Option<&'a str> {
    let mut parts = path.split('.');
    let mut value = feature.property(parts.next()?)?;
    for part in parts {
        value = value.get(part)?;
    }
    value.as_str()
}

/// Read shipments from any CSV source. Every row must parse; the first bad
/// row aborts the load.
pub fn read_shipments<R: Read>(source: R) -> Result<Vec<Shipment>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);

    let mut shipments = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, row) in reader.deserialize::<CsvRecord>().enumerate() {
        let record = row?;
        let shipment = record
            .to_shipment()
            .map_err(|source| DataError::Record { row: i + 1, source })?;
        if !seen.insert(shipment.order_id.clone()) {
            return Err(DataError::DuplicateOrder(shipment.order_id));
        }
        shipments.push(shipment);
    }

    Ok(shipments)
}

pub fn load_shipments(path: &Path) -> Result<Vec<Shipment>> {
    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_shipments(file)
}

/// Everything the dashboard reads, loaded once at startup
#[derive(Debug, Clone)]
pub struct Dataset {
    shipments: Vec<Shipment>,
    boundaries: Boundaries,
}

impl Dataset {
    pub fn new(shipments: Vec<Shipment>, boundaries: Boundaries) -> Self {
        Self {
            shipments,
            boundaries,
        }
    }

    pub fn load(shipments_path: &Path, boundaries_path: &Path, property_path: &str) -> Result<Self> {
        info!("Reading shipments from {:?}", shipments_path);
        let shipments = load_shipments(shipments_path)?;
        info!("Parsed {} shipments", shipments.len());

        info!("Reading boundaries from {:?}", boundaries_path);
        let boundaries = Boundaries::from_path(boundaries_path, property_path)?;
        info!("Loaded {} province boundaries", boundaries.len());

        Ok(Self::new(shipments, boundaries))
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn boundaries(&self) -> &Boundaries {
        &self.boundaries
    }
}
