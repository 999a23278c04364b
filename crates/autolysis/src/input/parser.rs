//! Encoding-aware CSV/TSV loader with delimiter detection.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::encoding::{decode, detect_encoding};
use super::source::{DataTable, SourceMetadata};
use crate::error::{AutolysisError, Result};

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Quote character for fields containing delimiters.
const QUOTE: u8 = b'"';

/// Loads delimited text files into a [`DataTable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Parser;

impl Parser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Read, decode and parse a file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();

        let contents = fs::read(path).map_err(|e| AutolysisError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let detected = detect_encoding(&contents);
        let (text, had_replacements) = decode(&contents, &detected);
        tracing::debug!(
            path = %path.display(),
            encoding = %detected.name(),
            bom = detected.has_bom,
            "decoded dataset"
        );

        let delimiter = detect_delimiter(text.as_bytes())?;

        let table = self.parse_text(&text, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let mut metadata = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            contents.len() as u64,
            format,
            detected.name(),
        )
        .with_shape(table.row_count(), table.column_count());
        metadata.had_replacements = had_replacements;

        Ok((table, metadata))
    }

    /// Parse already-decoded text.
    pub fn parse_text(&self, text: &str, delimiter: u8) -> Result<DataTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(QUOTE)
            .flexible(true)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = if i == 0 { h.trim_start_matches('\u{feff}') } else { h };
                h.to_string()
            })
            .collect();
        let headers = dedupe_headers(headers);

        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(AutolysisError::EmptyData("No columns to parse from file".to_string()));
        }

        let expected_cols = headers.len();
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;

            if record.len() > expected_cols {
                let line = record.position().map(|p| p.line()).unwrap_or(0);
                return Err(AutolysisError::Parse {
                    line,
                    message: format!("expected {} fields, saw {}", expected_cols, record.len()),
                });
            }

            let mut row: Vec<String> = record.iter().map(|s| s.to_string()).collect();

            // Short rows are missing trailing values
            row.resize(expected_cols, String::new());

            rows.push(row);
        }

        if rows.is_empty() {
            tracing::debug!(columns = expected_cols, "dataset has a header but no rows");
        }

        Ok(DataTable::new(headers, rows, delimiter))
    }
}

/// Rename repeated header names to `name.1`, `name.2`, ...
///
/// A generated name never collides with a header already in use.
fn dedupe_headers(headers: Vec<String>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::with_capacity(headers.len());
    let mut next_suffix: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(headers.len());

    for name in headers {
        if seen.insert(name.clone()) {
            result.push(name);
            continue;
        }

        let counter = next_suffix.entry(name.clone()).or_insert(1);
        let mut candidate = format!("{}.{}", name, counter);
        while seen.contains(&candidate) {
            *counter += 1;
            candidate = format!("{}.{}", name, counter);
        }
        *counter += 1;

        seen.insert(candidate.clone());
        result.push(candidate);
    }

    result
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .map_while(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(AutolysisError::EmptyData("No columns to parse from file".to_string()));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        let consistent = counts.iter().all(|&c| c == first_count);
        let variance: f64 = if counts.len() > 1 {
            let mean = counts.iter().sum::<usize>() as f64 / counts.len() as f64;
            counts.iter().map(|&c| (c as f64 - mean).powi(2)).sum::<f64>() / counts.len() as f64
        } else {
            0.0
        };

        // Higher count with lower variance wins; tab breaks ties
        let score = if consistent {
            first_count * 1000 + (if delim == b'\t' { 100 } else { 0 })
        } else if variance < 1.0 {
            first_count * 100
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
