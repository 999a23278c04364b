//! Plain-text rendering of a [`DescribeTable`].

use std::fmt;

use super::describe::{ColumnSummary, DescribeTable};

const MISSING: &str = "NaN";

const FREQUENCY_ROWS: &[&str] = &["unique", "top", "freq"];
const NUMERIC_ROWS: &[&str] = &["mean", "std", "min", "25%", "50%", "75%", "max"];

fn cell(column: &ColumnSummary, row: &str) -> String {
    if row == "count" {
        return column.count.to_string();
    }

    if let Some(freq) = &column.frequency {
        match row {
            "unique" => return freq.unique.to_string(),
            "top" => return freq.top.clone(),
            "freq" => return freq.freq.to_string(),
            _ => {}
        }
    }

    if let Some(stats) = &column.numeric {
        let value = match row {
            "mean" => Some(stats.mean),
            "std" => stats.std,
            "min" => Some(stats.min),
            "25%" => Some(stats.q1),
            "50%" => Some(stats.median),
            "75%" => Some(stats.q3),
            "max" => Some(stats.max),
            _ => None,
        };
        if let Some(v) = value {
            return format!("{:.6}", v);
        }
    }

    MISSING.to_string()
}

impl DescribeTable {
    fn row_labels(&self) -> Vec<&'static str> {
        let mut rows = vec!["count"];
        if self.columns.iter().any(|c| !c.column_type.is_numeric()) {
            rows.extend_from_slice(FREQUENCY_ROWS);
        }
        if self.columns.iter().any(|c| c.column_type.is_numeric()) {
            rows.extend_from_slice(NUMERIC_ROWS);
        }
        rows
    }
}

impl fmt::Display for DescribeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.row_labels();
        let label_width = rows.iter().map(|r| r.len()).max().unwrap_or(0);

        let grid: Vec<Vec<String>> = self
            .columns
            .iter()
            .map(|col| rows.iter().map(|row| cell(col, row)).collect())
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .zip(&grid)
            .map(|(col, cells)| {
                cells
                    .iter()
                    .map(|c| c.chars().count())
                    .chain(std::iter::once(col.name.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "{:label_width$}", "")?;
        for (col, width) in self.columns.iter().zip(&widths) {
            write!(f, "  {:>width$}", col.name, width = *width)?;
        }

        for (r, row) in rows.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<label_width$}", row)?;
            for (cells, width) in grid.iter().zip(&widths) {
                write!(f, "  {:>width$}", cells[r], width = *width)?;
            }
        }

        Ok(())
    }
}
