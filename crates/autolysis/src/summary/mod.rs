//! Descriptive statistics over every column of a table.
//!
//! [`describe`] produces a [`DescribeTable`] whose `Display` form is the
//! plain-text summary handed to the narration model.

mod describe;
mod render;

pub use describe::{ColumnSummary, DescribeTable, FrequencySummary, NumericSummary, describe, percentile};
