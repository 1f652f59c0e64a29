//! Category Aggregation Module
//! Counts field values in the selected column and shapes them for charting.

use crate::data::CsvTable;
use std::collections::HashMap;

/// One entry of the chart-ready series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

/// Count occurrences of each distinct value in the column at `col`.
pub fn count_values(table: &CsvTable, col: usize) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for row in table.rows() {
        if let Some(field) = row.get(col) {
            *counts.entry(field.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Shape counts into the rendered series: ascending by count, ties broken
/// by ascending name. Smallest categories chart first, matching the
/// reference tool's order.
pub fn sorted_series(counts: HashMap<String, usize>) -> Vec<CategoryCount> {
    let mut series: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, value)| CategoryCount { name, value })
        .collect();
    series.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.name.cmp(&b.name)));
    series
}

/// Count and sort the column at `col` in one step.
pub fn category_series(table: &CsvTable, col: usize) -> Vec<CategoryCount> {
    sorted_series(count_values(table, col))
}

/// Data rows whose field at `col` equals `name`, in original row order.
pub fn drill_down<'a>(table: &'a CsvTable, col: usize, name: &str) -> Vec<&'a [String]> {
    table
        .rows()
        .iter()
        .filter(|row| row.get(col).is_some_and(|field| field == name))
        .map(|row| row.as_slice())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CsvTable {
        CsvTable::parse("A,B\n1,2\nx,y\nx,z\nw,z\n").unwrap()
    }

    #[test]
    fn counts_cover_every_row_exactly_once() {
        let table = sample();
        let counts = count_values(&table, 1);
        assert_eq!(counts.values().sum::<usize>(), table.row_count());
        assert_eq!(counts.get("z"), Some(&2));
        assert_eq!(counts.get("y"), Some(&1));
    }

    #[test]
    fn series_sorts_ascending_by_value_then_name() {
        let mut counts = HashMap::new();
        counts.insert("beta".to_string(), 2);
        counts.insert("alpha".to_string(), 2);
        counts.insert("gamma".to_string(), 1);
        let series = sorted_series(counts);
        let order: Vec<(&str, usize)> = series
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value))
            .collect();
        assert_eq!(order, vec![("gamma", 1), ("alpha", 2), ("beta", 2)]);
    }

    #[test]
    fn drill_down_returns_only_matching_rows() {
        let table = sample();
        let rows = drill_down(&table, 1, "z");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row[1] == "z"));
        assert_eq!(rows[0][0], "x");
        assert_eq!(rows[1][0], "w");
        assert!(drill_down(&table, 1, "missing").is_empty());
    }

    #[test]
    fn round_trip_from_csv_to_series() {
        let table = CsvTable::parse("A,B\n1,2\nx,y\nx,z\n").unwrap();
        let col = table.keys().iter().position(|k| k == "A-1").unwrap();
        let counts = count_values(&table, col);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("x"), Some(&2));
        let series = sorted_series(counts);
        assert_eq!(
            series,
            vec![CategoryCount {
                name: "x".to_string(),
                value: 2
            }]
        );
    }
}
