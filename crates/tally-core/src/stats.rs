// Tally - Benchmark Result Aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Statistical reduction of timing samples.
//!
//! Turns a non-empty list of samples (nanoseconds) into a [`Summary`]. The
//! tabular pipeline reports the population standard deviation while the
//! log-scan pipeline reports the unbiased (n - 1) one, so the convention is
//! an explicit argument rather than a hidden default.

use crate::error::{Result, StatsError};
use serde::Serialize;
use std::cmp::Ordering;

/// Standard deviation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Deviation {
    /// Divide the squared-deviation sum by `n`.
    Population,
    /// Divide the squared-deviation sum by `n - 1` (Bessel-corrected).
    Sample,
}

impl Deviation {
    /// Returns the variance divisor for `count` samples, or `None` when the
    /// convention is undefined for that count.
    fn divisor(self, count: usize) -> Option<f64> {
        match self {
            Deviation::Population if count > 0 => Some(count as f64),
            Deviation::Sample if count > 1 => Some((count - 1) as f64),
            _ => None,
        }
    }
}

/// Read-only summary of one group of samples.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of samples.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (mean of the two middle values for even counts).
    pub median: f64,
    /// Standard deviation under the requested [`Deviation`].
    pub std_dev: f64,
    /// Smallest sample.
    pub min: f64,
    /// Largest sample.
    pub max: f64,
    /// Coefficient of variation in percent.
    pub cv: f64,
    /// Convention used for `std_dev`.
    pub deviation: Deviation,
}

impl Summary {
    /// Computes the summary of `samples`.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::EmptySamples`] when `samples` is empty.
    pub fn from_samples(samples: &[f64], deviation: Deviation) -> Result<Self> {
        if samples.is_empty() {
            return Err(StatsError::EmptySamples);
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        let count = sorted.len();
        let min = sorted[0];
        let max = sorted[count - 1];
        let mean = mean(&sorted).max(min).min(max);
        let std_dev = deviation
            .divisor(count)
            .map(|d| spread(&sorted, mean, d))
            .unwrap_or(0.0);

        let mid = count / 2;
        let median = if count % 2 == 0 {
            sorted[mid - 1] / 2.0 + sorted[mid] / 2.0
        } else {
            sorted[mid]
        };

        Ok(Self {
            count,
            mean,
            median,
            std_dev,
            min,
            max,
            cv: coefficient_of_variation(count, mean, std_dev),
            deviation,
        })
    }

    /// Ratio of `fastest` to this summary's mean (1.0 for the fastest entry).
    pub fn speed_relative_to(&self, fastest: f64) -> f64 {
        if self.mean > 0.0 {
            fastest / self.mean
        } else {
            0.0
        }
    }
}

/// Computes a [`Summary`] for `samples`.
///
/// # Examples
///
/// ```
/// use tally_core::{summarize, Deviation};
///
/// let summary = summarize(&[100.0, 200.0], Deviation::Population).unwrap();
/// assert_eq!(summary.mean, 150.0);
/// assert_eq!(summary.std_dev, 50.0);
/// ```
pub fn summarize(samples: &[f64], deviation: Deviation) -> Result<Summary> {
    Summary::from_samples(samples, deviation)
}

/// Arithmetic mean that stays finite for finite input.
///
/// Samples near `f64::MAX` overflow a plain sum; those fall back to summing
/// `x / n`, bounded by the extreme values. Returns `0.0` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        sum / n
    } else {
        let (lo, hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        values.iter().map(|x| x / n).sum::<f64>().max(lo).min(hi)
    }
}

/// Square root of the squared-deviation sum over `divisor`, rescaled by the
/// largest magnitude when the squares overflow.
fn spread(values: &[f64], mean: f64, divisor: f64) -> f64 {
    let squares: f64 = values.iter().map(|x| (x - mean) * (x - mean)).sum();
    if squares.is_finite() {
        return (squares / divisor).sqrt();
    }

    let scale = values.iter().fold(mean.abs(), |acc, x| acc.max(x.abs()));
    let scaled: f64 = values
        .iter()
        .map(|x| {
            let diff = x / scale - mean / scale;
            diff * diff
        })
        .sum();
    (scaled / divisor).sqrt() * scale
}

/// stdev / mean * 100, pinned to zero for single samples and a zero mean.
fn coefficient_of_variation(count: usize, mean: f64, std_dev: f64) -> f64 {
    if count < 2 || mean == 0.0 {
        0.0
    } else {
        std_dev / mean * 100.0
    }
}
