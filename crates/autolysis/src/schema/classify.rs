//! Column type classification.
//!
//! Decides which columns count as numeric. Everything downstream (summary
//! rows, which columns get charts) keys off this decision.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::{ColumnSchema, ColumnType, TableSchema};
use crate::input::DataTable;

/// Maximum distinct values for a column to be called categorical.
pub const CATEGORICAL_THRESHOLD: usize = 20;

static NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").expect("valid number pattern")
});

static INFINITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?i:inf|infinity)$").expect("valid infinity pattern"));

/// Whether a single non-null cell reads as a number.
pub fn is_numeric_value(value: &str) -> bool {
    let trimmed = value.trim();
    NUMBER.is_match(trimmed) || INFINITY.is_match(trimmed)
}

/// Parse a cell as a number; `None` for nulls and non-numbers.
pub fn parse_numeric(value: &str) -> Option<f64> {
    if DataTable::is_null_value(value) || !is_numeric_value(value) {
        return None;
    }
    let trimmed = value.trim();
    if INFINITY.is_match(trimmed) {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    trimmed.parse().ok()
}

/// Classify a column from its raw cells.
pub fn classify_column<'a>(values: impl IntoIterator<Item = &'a str>) -> ColumnType {
    let mut non_null = 0usize;
    let mut all_numeric = true;
    let mut distinct: HashSet<&str> = HashSet::new();

    for value in values {
        if DataTable::is_null_value(value) {
            continue;
        }
        non_null += 1;
        all_numeric &= is_numeric_value(value);
        distinct.insert(value);
    }

    // An all-missing column is numeric with no observations
    if all_numeric {
        ColumnType::Numeric
    } else if distinct.len() <= CATEGORICAL_THRESHOLD && distinct.len() < non_null {
        ColumnType::Categorical
    } else {
        ColumnType::Text
    }
}

/// Build the schema of every column in a table.
pub fn classify_table(table: &DataTable) -> TableSchema {
    let columns = table
        .headers
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let non_null: Vec<&str> = table
                .column_values(position)
                .filter(|v| !DataTable::is_null_value(v))
                .collect();
            let unique_count = non_null.iter().collect::<HashSet<_>>().len();

            ColumnSchema {
                name: name.clone(),
                position,
                column_type: classify_column(non_null.iter().copied()),
                non_null_count: non_null.len(),
                unique_count,
            }
        })
        .collect();

    TableSchema { columns }
}

/// Values of a column as numbers, null cells as `None`.
pub fn numeric_values(table: &DataTable, index: usize) -> Vec<Option<f64>> {
    table.column_values(index).map(parse_numeric).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_numeric_literals() {
        for v in ["1", "-2", "+3.5", ".5", "5.", "1e3", "2.5E-4", " 42 ", "inf", "-Infinity"] {
            assert!(is_numeric_value(v), "{v:?} should be numeric");
        }
        for v in ["abc", "1,000", "1.2.3", "e5", "0x1F", "12kg", ""] {
            assert!(!is_numeric_value(v), "{v:?} should not be numeric");
        }
    }

    #[test]
    fn test_nulls_do_not_break_numeric_columns() {
        assert_eq!(classify_column(["1", "NA", "", "3.5"]), ColumnType::Numeric);
    }

    #[test]
    fn test_single_word_makes_column_non_numeric() {
        assert_eq!(classify_column(["1", "2", "three"]), ColumnType::Text);
    }

    #[test]
    fn test_repeating_labels_are_categorical() {
        assert_eq!(
            classify_column(["red", "blue", "red", "green", "blue"]),
            ColumnType::Categorical
        );
    }

    #[test]
    fn test_all_distinct_strings_are_text() {
        assert_eq!(classify_column(["Alice", "Bob", "Carol"]), ColumnType::Text);
    }

    #[test]
    fn test_all_missing_column_is_numeric() {
        assert_eq!(classify_column(["", "NA", "null"]), ColumnType::Numeric);
        assert_eq!(classify_column(std::iter::empty()), ColumnType::Numeric);
    }

    #[test]
    fn test_padded_token_is_a_value() {
        assert_eq!(classify_column(["1", " NA", "2"]), ColumnType::Text);
    }

    #[test]
    fn test_classify_table_keeps_order_and_counts() {
        let table = make_table(
            vec!["age", "city", "score"],
            vec![
                vec!["30", "NYC", "1.5"],
                vec!["25", "NYC", ""],
                vec!["41", "LA", "2.0"],
            ],
        );
        let schema = classify_table(&table);

        let names: Vec<&str> = schema.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["age", "city", "score"]);
        assert_eq!(schema.columns[0].column_type, ColumnType::Numeric);
        assert_eq!(schema.columns[1].column_type, ColumnType::Categorical);
        assert_eq!(schema.columns[1].unique_count, 2);
        assert_eq!(schema.columns[2].non_null_count, 2);

        let numeric: Vec<&str> = schema.numeric_columns().map(|c| c.name.as_str()).collect();
        assert_eq!(numeric, vec!["age", "score"]);
    }

    #[test]
    fn test_numeric_values_maps_nulls_to_none() {
        let table = make_table(vec!["x"], vec![vec!["1"], vec!["NA"], vec!["-inf"]]);
        assert_eq!(
            numeric_values(&table, 0),
            vec![Some(1.0), None, Some(f64::NEG_INFINITY)]
        );
    }
}
