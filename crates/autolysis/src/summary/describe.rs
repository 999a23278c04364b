//! Per-column descriptive statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::schema::{ColumnType, TableSchema, parse_numeric};

/// Statistics for a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    /// First quartile (25th percentile).
    pub q1: f64,
    pub median: f64,
    /// Third quartile (75th percentile).
    pub q3: f64,
    pub max: f64,
}

/// Frequency information for a non-numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencySummary {
    /// Number of distinct non-null values.
    pub unique: usize,
    /// Most frequent value.
    pub top: String,
    /// Occurrences of `top`.
    pub freq: usize,
}

/// Summary of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub name: String,
    pub column_type: ColumnType,
    /// Non-null values.
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<FrequencySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

/// Summary of a whole table, one entry per column in table order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescribeTable {
    pub columns: Vec<ColumnSummary>,
}

impl DescribeTable {
    /// Summary for a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// Describe every column of `table`.
pub fn describe(table: &DataTable, schema: &TableSchema) -> DescribeTable {
    let columns = schema
        .columns
        .iter()
        .map(|col| {
            let values: Vec<&str> = table
                .column_values(col.position)
                .filter(|v| !DataTable::is_null_value(v))
                .collect();

            let (frequency, numeric) = if col.column_type.is_numeric() {
                let numbers: Vec<f64> = values.iter().filter_map(|v| parse_numeric(v)).collect();
                (None, numeric_summary(numbers))
            } else {
                (frequency_summary(&values), None)
            };

            ColumnSummary {
                name: col.name.clone(),
                column_type: col.column_type,
                count: values.len(),
                frequency,
                numeric,
            }
        })
        .collect();

    DescribeTable { columns }
}

fn frequency_summary(values: &[&str]) -> Option<FrequencySummary> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for &v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    // First value seen wins ties
    let mut top: Option<(&str, usize)> = None;
    for (&value, &count) in &counts {
        if top.is_none_or(|(_, best)| count > best) {
            top = Some((value, count));
        }
    }

    top.map(|(value, freq)| FrequencySummary {
        unique: counts.len(),
        top: value.to_string(),
        freq,
    })
}

fn numeric_summary(mut values: Vec<f64>) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        Some((ss / (n - 1.0)).sqrt())
    } else {
        None
    };

    Some(NumericSummary {
        mean,
        std,
        min: values[0],
        q1: percentile(&values, 25.0),
        median: percentile(&values, 50.0),
        q3: percentile(&values, 75.0),
        max: values[values.len() - 1],
    })
}

/// Percentile of sorted values with linear interpolation between ranks.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        len => {
            let rank = (p / 100.0).clamp(0.0, 1.0) * (len - 1) as f64;
            let lower = rank.floor() as usize;
            let upper = rank.ceil() as usize;
            let fraction = rank - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
        }
    }
}
