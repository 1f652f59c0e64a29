//! Trend Data Module
//! Extracts numeric columns from a parsed table as named metric series.

use crate::data::CsvTable;

/// One metric line: the column's composite key and its values in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub name: String,
    pub values: Vec<f64>,
}

/// Metric records for the trend view.
///
/// Every column whose fields all parse as `f64` becomes one metric; the
/// first non-numeric column, if any, labels the x axis. Records keep
/// their original row order.
#[derive(Debug, Clone, Default)]
pub struct TrendData {
    pub x_labels: Vec<String>,
    pub metrics: Vec<TrendSeries>,
}

impl TrendData {
    pub fn from_table(table: &CsvTable) -> Self {
        let mut x_labels: Vec<String> = Vec::new();
        let mut metrics: Vec<TrendSeries> = Vec::new();

        if table.row_count() == 0 {
            return Self::default();
        }

        for (col, key) in table.keys().iter().enumerate() {
            let parsed: Option<Vec<f64>> = table
                .rows()
                .iter()
                .map(|row| row.get(col).and_then(|f| f.trim().parse::<f64>().ok()))
                .collect();

            match parsed {
                Some(values) => metrics.push(TrendSeries {
                    name: key.clone(),
                    values,
                }),
                None if x_labels.is_empty() => {
                    x_labels = table
                        .rows()
                        .iter()
                        .filter_map(|row| row.get(col).cloned())
                        .collect();
                }
                None => {}
            }
        }

        Self { x_labels, metrics }
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn record_count(&self) -> usize {
        self.metrics.first().map(|m| m.values.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_columns_become_metrics() {
        let table =
            CsvTable::parse("run,avg,ok\nid,ms,count\nfirst,1.5,3\nsecond,2.0,4\n").unwrap();
        let trend = TrendData::from_table(&table);
        assert_eq!(trend.metrics.len(), 2);
        assert_eq!(trend.metrics[0].name, "avg-ms");
        assert_eq!(trend.metrics[0].values, vec![1.5, 2.0]);
        assert_eq!(trend.metrics[1].name, "ok-count");
        assert_eq!(trend.metrics[1].values, vec![3.0, 4.0]);
        assert_eq!(trend.record_count(), 2);
    }

    #[test]
    fn first_non_numeric_column_labels_the_axis() {
        let table = CsvTable::parse("run,avg\nid,ms\nfirst,1.5\nsecond,2.0\n").unwrap();
        let trend = TrendData::from_table(&table);
        assert_eq!(
            trend.x_labels,
            vec!["first".to_string(), "second".to_string()]
        );
    }

    #[test]
    fn table_without_numeric_columns_is_empty() {
        let table = CsvTable::parse("A,B\n1,2\nx,y\n").unwrap();
        let trend = TrendData::from_table(&table);
        assert!(trend.is_empty());
        assert_eq!(trend.record_count(), 0);
    }

    #[test]
    fn table_without_data_rows_is_empty() {
        let table = CsvTable::parse("A,B\n1,2\n").unwrap();
        assert!(TrendData::from_table(&table).is_empty());
    }
}
