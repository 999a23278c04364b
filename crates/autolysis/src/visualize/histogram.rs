//! Equal-width histogram binning.

use serde::{Deserialize, Serialize};

/// Counts of values falling into equal-width bins over `[min, max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin the finite values of `values` into `bins` bins.
    ///
    /// A constant column gets a unit-wide range centred on its value. With
    /// no finite values the range is `[0, 1]` and every count is zero.
    pub fn new(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

        let (mut min, mut max) = finite
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if finite.is_empty() {
            min = 0.0;
            max = 1.0;
        } else if min == max {
            min -= 0.5;
            max += 0.5;
        }

        let width = (max - min) / bins as f64;
        let mut counts = vec![0usize; bins];
        for v in finite {
            // The last bin is closed on the right
            let index = (((v - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        Self { min, max, counts }
    }

    /// Width of each bin.
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// `(lower, upper, count)` for each bin.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        let width = self.bin_width();
        self.counts.iter().enumerate().map(move |(i, &count)| {
            let lower = self.min + width * i as f64;
            (lower, lower + width, count)
        })
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}
