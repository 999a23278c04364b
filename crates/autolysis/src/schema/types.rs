//! Core type definitions for schema representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Detected kind of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Every non-null value is a number.
    Numeric,
    /// Few distinct values that repeat.
    Categorical,
    /// Free text, or a column with no values at all.
    Text,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Categorical => "categorical",
            ColumnType::Text => "text",
        };
        f.write_str(name)
    }
}

/// Schema for a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Zero-based position in the table.
    pub position: usize,
    /// Detected type.
    pub column_type: ColumnType,
    /// Number of non-null values.
    pub non_null_count: usize,
    /// Number of distinct non-null values.
    pub unique_count: usize,
}

/// Schema for a whole table, in column order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSchema {
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Numeric columns in their original order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|c| c.column_type.is_numeric())
    }

    /// Whether any column is not numeric.
    pub fn has_non_numeric(&self) -> bool {
        self.columns.iter().any(|c| !c.column_type.is_numeric())
    }
}
