//! Synthetic shipment rows in the cleaned-CSV layout.
//!
//! Used to produce a demo dataset when the real one is not at hand. Mode,
//! status, province and hour are drawn from fixed weights; transit time
//! depends on the mode.

use chrono::{Datelike, Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::models::{weekday_name, CsvRecord};

/// Provinces as named in the GADM level-1 boundary file
pub const PROVINCES: [(&str, u32); 12] = [
    ("Jakarta Raya", 22),
    ("Jawa Barat", 20),
    ("Jawa Timur", 14),
    ("Jawa Tengah", 12),
    ("Banten", 8),
    ("Sumatera Utara", 6),
    ("Sulawesi Selatan", 4),
    ("Bali", 4),
    ("Kalimantan Timur", 3),
    ("Riau", 3),
    ("Yogyakarta", 2),
    ("Papua", 2),
];

/// (mode, weight, min transit days, max transit days)
pub const MODES: [(&str, u32, u32, u32); 3] = [
    ("STANDARD", 70, 2, 6),
    ("EXPRESS", 22, 1, 3),
    ("SAME DAY", 8, 0, 1),
];

pub const STATUSES: [(&str, u32); 3] = [("Completed", 86), ("Returned", 9), ("Canceled", 5)];

pub struct SyntheticGenerator {
    start: NaiveDate,
    days: i64,
    provinces: WeightedIndex<u32>,
    modes: WeightedIndex<u32>,
    statuses: WeightedIndex<u32>,
    hours: WeightedIndex<u32>,
}

/// Orders cluster in working hours with an evening bump
fn hour_weight(hour: u32) -> u32 {
    match hour {
        0..=5 => 1,
        6..=8 => 4,
        9..=12 => 10,
        13..=16 => 8,
        17..=21 => 6,
        _ => 2,
    }
}

impl SyntheticGenerator {
    /// Rows are spread over `days` consecutive days starting at `start`
    pub fn new(start: NaiveDate, days: u32) -> anyhow::Result<Self> {
        anyhow::ensure!(days > 0, "date range must cover at least one day");
        Ok(Self {
            start,
            days: i64::from(days),
            provinces: WeightedIndex::new(PROVINCES.iter().map(|p| p.1))?,
            modes: WeightedIndex::new(MODES.iter().map(|m| m.1))?,
            statuses: WeightedIndex::new(STATUSES.iter().map(|s| s.1))?,
            hours: WeightedIndex::new((0..24).map(hour_weight))?,
        })
    }

    pub fn record<R: Rng>(&self, index: usize, rng: &mut R) -> CsvRecord {
        let date = self.start + Duration::days(rng.gen_range(0..self.days));
        let (mode, _, min_days, max_days) = MODES[self.modes.sample(rng)];

        CsvRecord {
            order_id: format!("COD-{:07}", index + 1),
            status: STATUSES[self.statuses.sample(rng)].0.to_string(),
            ship_mode: mode.to_string(),
            province: PROVINCES[self.provinces.sample(rng)].0.to_string(),
            creation_date: date.format("%Y-%m-%d").to_string(),
            order_day: weekday_name(date.weekday()).to_string(),
            order_hour: self.hours.sample(rng) as i64,
            day_to_arv: f64::from(rng.gen_range(min_days..=max_days)),
        }
    }

    pub fn generate<R: Rng>(&self, count: usize, rng: &mut R) -> Vec<CsvRecord> {
        (0..count).map(|i| self.record(i, rng)).collect()
    }
}
