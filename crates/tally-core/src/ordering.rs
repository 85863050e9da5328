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

//! Language ordering policy.
//!
//! Known labels sort by their position in a fixed preferred sequence; any
//! other label sorts after all of them, lexicographically. Matching is
//! case-insensitive.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Default preferred language sequence.
pub const PREFERRED_LANGUAGES: &[&str] = &["tenge", "c", "rust", "go"];

/// Sort key produced by [`LanguageOrder::rank`].
///
/// The derived ordering places every `Preferred` rank before any `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LanguageRank {
    /// Index into the preferred sequence.
    Preferred(usize),
    /// Lower-cased label not present in the preferred sequence.
    Other(String),
}

/// Fixed preferred ordering of language labels.
///
/// # Examples
///
/// ```
/// use tally_core::LanguageOrder;
///
/// let order = LanguageOrder::default();
/// let mut labels = vec!["go", "tenge", "x", "rust", "c"];
/// order.sort(&mut labels);
/// assert_eq!(labels, ["tenge", "c", "rust", "go", "x"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOrder {
    preferred: Vec<String>,
}

impl Default for LanguageOrder {
    fn default() -> Self {
        Self::new(PREFERRED_LANGUAGES.iter().copied())
    }
}

impl LanguageOrder {
    /// Creates an ordering from a preferred sequence. Duplicates keep their
    /// first position.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut preferred: Vec<String> = Vec::new();
        for label in labels {
            let label = label.as_ref().trim().to_lowercase();
            if !preferred.contains(&label) {
                preferred.push(label);
            }
        }
        Self { preferred }
    }

    /// The preferred sequence, lower-cased.
    pub fn preferred(&self) -> &[String] {
        &self.preferred
    }

    /// Returns `true` if `label` is part of the preferred sequence.
    pub fn is_preferred(&self, label: &str) -> bool {
        matches!(self.rank(label), LanguageRank::Preferred(_))
    }

    /// Maps a label to its sort key.
    pub fn rank(&self, label: &str) -> LanguageRank {
        let lower = label.to_lowercase();
        match self.preferred.iter().position(|p| *p == lower) {
            Some(index) => LanguageRank::Preferred(index),
            None => LanguageRank::Other(lower),
        }
    }

    /// Compares two labels under this ordering.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.rank(a).cmp(&self.rank(b))
    }

    /// Sorts labels in place. Labels that rank equal keep their relative order.
    pub fn sort<S: AsRef<str>>(&self, labels: &mut [S]) {
        labels.sort_by_cached_key(|l| self.rank(l.as_ref()));
    }

    /// Builds report columns: the full preferred sequence, then every other
    /// encountered label (lower-cased, deduplicated, lexicographic).
    pub fn columns<'a, I>(&self, seen: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let extras: BTreeSet<String> = seen
            .into_iter()
            .filter_map(|label| match self.rank(label) {
                LanguageRank::Other(lower) => Some(lower),
                LanguageRank::Preferred(_) => None,
            })
            .collect();

        self.preferred.iter().cloned().chain(extras).collect()
    }
}
