//! Group-by and count over shipment slices.
//!
//! Every function borrows its input and returns a fresh table; nothing here
//! touches the loaded dataset.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::models::{weekday_name, Shipment, WEEKDAYS};

/// One row of a single-key count table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount<K> {
    pub key: K,
    pub count: u64,
}

/// Count rows per key, ascending by key
pub fn count_by<'a, K, I, F>(records: I, key: F) -> Vec<GroupCount<K>>
where
    K: Ord,
    I: IntoIterator<Item = &'a Shipment>,
    F: Fn(&'a Shipment) -> K,
{
    let mut groups: BTreeMap<K, u64> = BTreeMap::new();
    for record in records {
        *groups.entry(key(record)).or_insert(0) += 1;
    }
    groups
        .into_iter()
        .map(|(key, count)| GroupCount { key, count })
        .collect()
}

/// Arithmetic mean of `value` over the records, `None` when there are none
pub fn mean_of<'a, I, F>(records: I, value: F) -> Option<f64>
where
    I: IntoIterator<Item = &'a Shipment>,
    F: Fn(&'a Shipment) -> f64,
{
    let (sum, n) = records
        .into_iter()
        .fold((0.0, 0u64), |(sum, n), r| (sum + value(r), n + 1));
    (n > 0).then(|| sum / n as f64)
}

pub fn count_by_province(records: &[Shipment]) -> Vec<GroupCount<String>> {
    count_by(records, |s| s.province.clone())
}

pub fn count_by_mode(records: &[Shipment]) -> Vec<GroupCount<String>> {
    count_by(records, |s| s.ship_mode.clone())
}

/// Dropdown options, sorted
pub fn distinct_modes(records: &[Shipment]) -> Vec<String> {
    records
        .iter()
        .map(|s| s.ship_mode.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Exact, case-sensitive match on shipping mode
pub fn filter_by_mode<'a>(records: &'a [Shipment], mode: &str) -> Vec<&'a Shipment> {
    records.iter().filter(|s| s.ship_mode == mode).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Shipments per creation date, ascending by date
pub fn daily_trend(records: &[&Shipment]) -> Vec<DailyCount> {
    count_by(records.iter().copied(), |s| s.creation_date)
        .into_iter()
        .map(|g| DailyCount {
            date: g.key,
            count: g.count,
        })
        .collect()
}

const HOURS: usize = 24;

/// Weekday × hour counts. Rows follow [`WEEKDAYS`]; a `None` cell means no
/// shipment fell into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHourMatrix {
    cells: [[Option<u64>; HOURS]; 7],
}

fn row_index(day: Weekday) -> usize {
    day.num_days_from_monday() as usize
}

impl DayHourMatrix {
    pub fn empty() -> Self {
        Self {
            cells: [[None; HOURS]; 7],
        }
    }

    pub fn from_records(records: &[&Shipment]) -> Self {
        let mut matrix = Self::empty();
        for record in records {
            let cell = &mut matrix.cells[row_index(record.order_day)][record.order_hour as usize];
            *cell = Some(cell.unwrap_or(0) + 1);
        }
        matrix
    }

    pub fn get(&self, day: Weekday, hour: u8) -> Option<u64> {
        self.cells
            .get(row_index(day))
            .and_then(|row| row.get(hour as usize))
            .copied()
            .flatten()
    }

    /// All seven rows, Monday first
    pub fn rows(&self) -> impl Iterator<Item = (Weekday, &[Option<u64>; HOURS])> + '_ {
        WEEKDAYS
            .into_iter()
            .map(move |day| (day, &self.cells[row_index(day)]))
    }

    /// Hours with at least one shipment on any day, ascending
    pub fn observed_hours(&self) -> Vec<u8> {
        (0..HOURS)
            .filter(|h| self.cells.iter().any(|row| row[*h].is_some()))
            .map(|h| h as u8)
            .collect()
    }

    pub fn populated_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    pub fn total(&self) -> u64 {
        self.cells.iter().flatten().flatten().sum()
    }

    /// Rows restricted to `hours`, for rendering
    pub fn project(&self, hours: &[u8]) -> Vec<(&'static str, Vec<Option<u64>>)> {
        self.rows()
            .map(|(day, row)| {
                (
                    weekday_name(day),
                    hours.iter().map(|h| row[*h as usize]).collect(),
                )
            })
            .collect()
    }
}

impl Default for DayHourMatrix {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_mode_counts_scenario() {
        let records = fixtures::scenario();
        let modes = count_by_mode(&records);
        assert_eq!(
            modes,
            vec![
                GroupCount { key: "EXPRESS".to_string(), count: 1 },
                GroupCount { key: "STANDARD".to_string(), count: 2 },
            ]
        );
    }

    #[test]
    fn test_counts_sum_to_total() {
        let dataset = fixtures::dataset();
        let records = dataset.shipments();
        let total = records.len() as u64;

        let provinces = count_by_province(records);
        assert_eq!(provinces.iter().map(|g| g.count).sum::<u64>(), total);
        assert!(provinces.iter().all(|g| g.count <= total));

        let modes = count_by_mode(records);
        assert_eq!(modes.iter().map(|g| g.count).sum::<u64>(), total);
    }

    #[test]
    fn test_provinces_without_shipments_are_absent() {
        let records = fixtures::scenario();
        let provinces = count_by_province(&records);
        assert_eq!(provinces.len(), 1);
        assert_eq!(provinces[0].key, "Jawa Barat");
        assert_eq!(provinces[0].count, 3);
    }

    #[test]
    fn test_empty_records_give_empty_tables() {
        assert!(count_by_province(&[]).is_empty());
        assert!(count_by_mode(&[]).is_empty());
        assert!(distinct_modes(&[]).is_empty());

        let none: Vec<Shipment> = Vec::new();
        assert_eq!(mean_of(&none, |s| s.transit_days), None);
    }

    #[test]
    fn test_filter_size_matches_mode_count() {
        let dataset = fixtures::dataset();
        let records = dataset.shipments();
        for group in count_by_mode(records) {
            assert_eq!(filter_by_mode(records, &group.key).len() as u64, group.count);
        }
    }

    #[test]
    fn test_filter_is_exact_and_case_sensitive() {
        let records = fixtures::scenario();
        assert!(filter_by_mode(&records, "express").is_empty());
        assert!(filter_by_mode(&records, "EXPRESS ").is_empty());
        assert_eq!(filter_by_mode(&records, "EXPRESS").len(), 1);
    }

    #[test]
    fn test_daily_trend_ascending() {
        let mut records = fixtures::scenario();
        records[0].creation_date = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
        records[1].creation_date = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap();
        records[2].creation_date = NaiveDate::from_ymd_opt(2023, 2, 10).unwrap();
        let all: Vec<&Shipment> = records.iter().collect();

        let trend = daily_trend(&all);
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].date, NaiveDate::from_ymd_opt(2023, 1, 5).unwrap());
        assert_eq!(trend[0].count, 1);
        assert_eq!(trend[1].count, 2);
        assert!(trend.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_matrix_marks_unaggregated_cells() {
        let dataset = fixtures::dataset();
        let standard = filter_by_mode(dataset.shipments(), "STANDARD");
        let matrix = DayHourMatrix::from_records(&standard);

        assert_eq!(matrix.get(Weekday::Mon, 9), Some(1));
        assert_eq!(matrix.get(Weekday::Tue, 14), Some(1));
        assert_eq!(matrix.get(Weekday::Mon, 14), None);
        assert_eq!(matrix.get(Weekday::Sun, 9), None);
        assert_eq!(matrix.populated_cells(), 2);
        assert_eq!(matrix.total(), 2);
        assert_eq!(matrix.observed_hours(), vec![9, 14]);
    }

    #[test]
    fn test_matrix_always_has_seven_rows_in_order() {
        let matrix = DayHourMatrix::from_records(&[]);
        let days: Vec<Weekday> = matrix.rows().map(|(d, _)| d).collect();
        assert_eq!(days, WEEKDAYS.to_vec());
        assert_eq!(matrix.populated_cells(), 0);
        assert!(matrix.observed_hours().is_empty());
    }

    #[test]
    fn test_matrix_counts_repeated_cell() {
        let records = fixtures::scenario();
        let all: Vec<&Shipment> = records.iter().collect();
        let matrix = DayHourMatrix::from_records(&all);
        assert_eq!(matrix.get(Weekday::Mon, 9), Some(3));
        assert_eq!(matrix.populated_cells(), 1);
    }

    #[test]
    fn test_project_keeps_row_order() {
        let records = fixtures::scenario();
        let all: Vec<&Shipment> = records.iter().collect();
        let matrix = DayHourMatrix::from_records(&all);
        let rows = matrix.project(&[8, 9]);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], ("Monday", vec![None, Some(3)]));
        assert_eq!(rows[6], ("Sunday", vec![None, None]));
    }

    #[test]
    fn test_aggregation_leaves_source_untouched() {
        let records = fixtures::scenario();
        let before = format!("{:?}", records);
        let _ = count_by_mode(&records);
        let _ = daily_trend(&filter_by_mode(&records, "STANDARD"));
        assert_eq!(format!("{:?}", records), before);
    }
}
