//! Headline numbers shown as cards at the top of the page

use serde::Serialize;

use crate::aggregate::mean_of;
use crate::models::Shipment;

pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total_count: u64,
    /// Percentage of completed orders; `None` when there are no orders
    pub completion_rate: Option<f64>,
    /// Mean days to arrival; `None` when there are no orders
    pub mean_transit_days: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: String,
    pub value: String,
}

impl SummaryStats {
    pub fn compute(records: &[Shipment]) -> Self {
        let total_count = records.len() as u64;
        let completed = records.iter().filter(|s| s.is_completed()).count() as u64;

        let completion_rate =
            (total_count > 0).then(|| completed as f64 / total_count as f64 * 100.0);

        Self {
            total_count,
            completion_rate,
            mean_transit_days: mean_of(records, |s| s.transit_days),
        }
    }

    pub fn cards(&self) -> Vec<Card> {
        vec![
            Card {
                title: "Total Shipments".to_string(),
                value: format_thousands(self.total_count),
            },
            Card {
                title: "Completed Shipments".to_string(),
                value: self
                    .completion_rate
                    .map(|r| format!("{:.2}%", r))
                    .unwrap_or_else(|| NO_DATA.to_string()),
            },
            Card {
                title: "Average Delivery Time".to_string(),
                value: self
                    .mean_transit_days
                    .map(|d| format!("{:.0} days", d))
                    .unwrap_or_else(|| NO_DATA.to_string()),
            },
        ]
    }
}

/// `1234567` -> `"1,234,567"`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
