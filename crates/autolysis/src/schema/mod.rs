//! Column types and the classification policy that assigns them.

mod classify;
mod types;

pub use classify::{
    CATEGORICAL_THRESHOLD, classify_column, classify_table, is_numeric_value, numeric_values,
    parse_numeric,
};
pub use types::{ColumnSchema, ColumnType, TableSchema};
