//! Property-based tests for the statistics and report helpers.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p autolysis --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p autolysis --test property_tests
//! ```

use std::path::PathBuf;

use proptest::prelude::*;

use autolysis::report::render_report;
use autolysis::schema::{ColumnType, classify_column};
use autolysis::summary::percentile;
use autolysis::visualize::{Histogram, correlation_matrix, pearson};
use autolysis::{Artifact, ArtifactKind, Parser};

// =============================================================================
// Test Strategies
// =============================================================================

/// Finite floats of moderate magnitude, with occasional gaps.
fn sparse_column(len: usize) -> impl Strategy<Value = Vec<Option<f64>>> {
    prop::collection::vec(prop::option::weighted(0.8, -1.0e6..1.0e6f64), len)
}

/// Values including non-finite ones.
fn any_value() -> impl Strategy<Value = f64> {
    prop_oneof![
        8 => -1.0e9..1.0e9f64,
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
        1 => Just(f64::NEG_INFINITY),
    ]
}

/// Tokens read as missing.
fn null_token() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "NA", "N/A", "NaN", "null", "NULL", "nan", "None"])
}

fn artifact_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}_distribution\\.png"
}

// =============================================================================
// Correlation
// =============================================================================

proptest! {
    #[test]
    fn correlation_is_symmetric_and_bounded(
        columns in (2usize..30).prop_flat_map(|rows| prop::collection::vec(sparse_column(rows), 1..5))
    ) {
        let matrix = correlation_matrix(&columns);
        let n = columns.len();
        prop_assert_eq!(matrix.len(), n);

        for i in 0..n {
            for j in 0..n {
                let (a, b) = (matrix[i][j], matrix[j][i]);
                prop_assert!(a.is_nan() && b.is_nan() || a == b);
                if !a.is_nan() {
                    prop_assert!((-1.0..=1.0).contains(&a));
                }
            }
        }
    }

    #[test]
    fn pearson_ignores_argument_order(
        pairs in prop::collection::vec((-1.0e3..1.0e3f64, -1.0e3..1.0e3f64), 0..40)
    ) {
        let (xs, ys): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        let a = pearson(&xs, &ys);
        let b = pearson(&ys, &xs);
        prop_assert!(a.is_nan() && b.is_nan() || (a - b).abs() < 1e-12);
    }
}

// =============================================================================
// Histogram
// =============================================================================

proptest! {
    #[test]
    fn histogram_counts_every_finite_value(
        values in prop::collection::vec(any_value(), 0..200),
        bins in 1usize..30,
    ) {
        let histogram = Histogram::new(&values, bins);
        let finite = values.iter().filter(|v| v.is_finite()).count();

        prop_assert_eq!(histogram.counts.len(), bins);
        prop_assert_eq!(histogram.total(), finite);
        prop_assert!(histogram.min < histogram.max);
    }
}

// =============================================================================
// Classification
// =============================================================================

proptest! {
    #[test]
    fn null_tokens_do_not_change_numeric_classification(
        numbers in prop::collection::vec(-1.0e6..1.0e6f64, 1..20),
        nulls in prop::collection::vec(null_token(), 0..10),
    ) {
        let rendered: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
        let mut cells: Vec<&str> = rendered.iter().map(String::as_str).collect();
        cells.extend(nulls.iter().copied());

        prop_assert_eq!(classify_column(cells), ColumnType::Numeric);
    }

    #[test]
    fn classification_never_panics(cells in prop::collection::vec(".{0,12}", 0..40)) {
        let _ = classify_column(cells.iter().map(String::as_str));
    }
}

// =============================================================================
// Percentiles
// =============================================================================

proptest! {
    #[test]
    fn percentiles_are_monotone_and_bounded(
        mut values in prop::collection::vec(-1.0e6..1.0e6f64, 1..100)
    ) {
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let q1 = percentile(&values, 25.0);
        let median = percentile(&values, 50.0);
        let q3 = percentile(&values, 75.0);

        // Interpolation may round by an ulp or so
        let eps = 1e-6;
        prop_assert!(values[0] <= q1 + eps);
        prop_assert!(q1 <= median + eps);
        prop_assert!(median <= q3 + eps);
        prop_assert!(q3 <= values[values.len() - 1] + eps);
    }
}

// =============================================================================
// Parsing and reporting
// =============================================================================

proptest! {
    #[test]
    fn parser_never_panics(text in "[a-z0-9,;\"\\n]{0,200}") {
        let _ = Parser::new().parse_text(&text, b',');
    }

    #[test]
    fn report_is_deterministic_and_ordered(
        story in "[A-Za-z .]{0,80}",
        names in prop::collection::vec(artifact_name(), 0..4),
    ) {
        let artifacts: Vec<Artifact> = names
            .iter()
            .map(|name| Artifact {
                kind: ArtifactKind::Histogram { column: name.clone() },
                file_name: name.clone(),
                path: PathBuf::from(name),
            })
            .collect();

        let first = render_report(&story, &artifacts);
        prop_assert_eq!(&first, &render_report(&story, &artifacts));

        let embedded: Vec<&str> = first
            .lines()
            .skip_while(|l| *l != "## Visualizations")
            .skip(1)
            .collect();
        let expected: Vec<String> = names.iter().map(|n| format!("![{0}]({0})", n)).collect();
        prop_assert_eq!(embedded, expected);
    }
}
