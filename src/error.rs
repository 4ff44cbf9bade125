//! Errors raised while loading the dashboard inputs

use std::path::PathBuf;
use thiserror::Error;

/// A single CSV row that could not be turned into a shipment
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("unparseable creation_date '{0}'")]
    Date(String),

    #[error("unknown order_day '{0}'")]
    Weekday(String),

    #[error("order_hour {0} outside 0-23")]
    Hour(i64),

    #[error("day_to_arv {0} is not a non-negative number")]
    TransitDays(f64),
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: {source}")]
    Record { row: usize, source: RecordError },

    #[error("duplicate order_id '{0}'")]
    DuplicateOrder(String),

    #[error("malformed GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("boundary file must be a FeatureCollection")]
    NotFeatureCollection,
}

pub type Result<T> = std::result::Result<T, DataError>;
