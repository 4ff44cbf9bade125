use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RecordError;

/// Raw row from the cleaned shipment CSV
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CsvRecord {
    pub order_id: String,
    pub status: String,
    pub ship_mode: String,
    pub province: String,
    pub creation_date: String,
    pub order_day: String,
    pub order_hour: i64,
    pub day_to_arv: f64,
}

/// Order status. Only `Completed` matters to the dashboard, every other
/// value is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OrderStatus {
    Completed,
    Other(String),
}

impl From<&str> for OrderStatus {
    fn from(s: &str) -> Self {
        match s {
            "Completed" => OrderStatus::Completed,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Completed => f.write_str("Completed"),
            OrderStatus::Other(s) => f.write_str(s),
        }
    }
}

/// One cash-on-delivery order
#[derive(Debug, Clone, Serialize)]
pub struct Shipment {
    pub order_id: String,
    pub status: OrderStatus,
    pub ship_mode: String,
    pub province: String,
    pub creation_date: NaiveDate,
    pub order_day: Weekday,
    pub order_hour: u8,
    pub transit_days: f64,
}

impl Shipment {
    pub fn is_completed(&self) -> bool {
        self.status == OrderStatus::Completed
    }
}

/// Heatmap row order
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English name, as it appears in the `order_day` column
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn parse_creation_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

impl CsvRecord {
    pub fn to_shipment(&self) -> Result<Shipment, RecordError> {
        let creation_date = parse_creation_date(&self.creation_date)
            .ok_or_else(|| RecordError::Date(self.creation_date.clone()))?;

        let order_day: Weekday = self
            .order_day
            .trim()
            .parse()
            .map_err(|_| RecordError::Weekday(self.order_day.clone()))?;

        let order_hour = u8::try_from(self.order_hour)
            .ok()
            .filter(|h| *h < 24)
            .ok_or(RecordError::Hour(self.order_hour))?;

        if !self.day_to_arv.is_finite() || self.day_to_arv < 0.0 {
            return Err(RecordError::TransitDays(self.day_to_arv));
        }

        Ok(Shipment {
            order_id: self.order_id.clone(),
            status: OrderStatus::from(self.status.as_str()),
            ship_mode: self.ship_mode.clone(),
            province: self.province.clone(),
            creation_date,
            order_day,
            order_hour,
            transit_days: self.day_to_arv,
        })
    }
}
