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

//! Grouping of samples by configuration and deterministic ordering.

use crate::error::Result;
use crate::ordering::LanguageOrder;
use crate::record::RawRecord;
use crate::stats::{Deviation, Summary};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Identifies one benchmark configuration.
///
/// Missing components are empty strings. Keys compare structurally and are
/// case-sensitive; only the report ordering treats languages case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupKey {
    /// Benchmark task.
    pub task: String,
    /// Implementation language.
    pub lang: String,
    /// Algorithmic variant.
    pub variant: String,
    /// Problem size, free-form text.
    pub size: String,
}

impl GroupKey {
    /// Creates a key from its four components.
    pub fn new(
        task: impl Into<String>,
        lang: impl Into<String>,
        variant: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            task: task.into(),
            lang: lang.into(),
            variant: variant.into(),
            size: size.into(),
        }
    }

    /// Report ordering: task, language rank, variant, size (string compare),
    /// then the raw language label so that case variants stay deterministic.
    pub fn compare(&self, other: &Self, order: &LanguageOrder) -> Ordering {
        self.task
            .cmp(&other.task)
            .then_with(|| order.compare(&self.lang, &other.lang))
            .then_with(|| self.variant.cmp(&other.variant))
            .then_with(|| self.size.cmp(&other.size))
            .then_with(|| self.lang.cmp(&other.lang))
    }
}

/// Samples accumulated per [`GroupKey`] for one run.
///
/// # Examples
///
/// ```
/// use tally_core::{GroupKey, Groups};
///
/// let mut groups = Groups::new();
/// groups.observe(GroupKey::new("fib", "c", "", "10"), 100.0);
/// groups.observe(GroupKey::new("fib", "c", "", "10"), 200.0);
/// assert_eq!(groups.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Groups {
    samples: HashMap<GroupKey, Vec<f64>>,
}

impl Groups {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds a sequence of records into groups.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        records.into_iter().map(RawRecord::extract).collect()
    }

    /// Adds one sample, creating the group on first sight.
    pub fn observe(&mut self, key: GroupKey, sample: f64) {
        self.samples.entry(key).or_default().push(sample);
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Samples of one group in arrival order.
    pub fn get(&self, key: &GroupKey) -> Option<&[f64]> {
        self.samples.get(key).map(Vec::as_slice)
    }

    /// Reduces every group and returns the summaries in report order.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::StatsError::EmptySamples`]; unreachable through
    /// [`Groups::observe`].
    pub fn summarize(
        &self,
        deviation: Deviation,
        order: &LanguageOrder,
    ) -> Result<Vec<GroupSummary>> {
        let mut rows = self
            .samples
            .iter()
            .map(|(key, samples)| {
                Ok(GroupSummary {
                    key: key.clone(),
                    summary: Summary::from_samples(samples, deviation)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        sort_summaries(&mut rows, order);
        Ok(rows)
    }
}

impl FromIterator<(GroupKey, f64)> for Groups {
    fn from_iter<I: IntoIterator<Item = (GroupKey, f64)>>(iter: I) -> Self {
        let mut groups = Groups::new();
        groups.extend(iter);
        groups
    }
}

impl Extend<(GroupKey, f64)> for Groups {
    fn extend<I: IntoIterator<Item = (GroupKey, f64)>>(&mut self, iter: I) {
        for (key, sample) in iter {
            self.observe(key, sample);
        }
    }
}

/// A group key with its reduced statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    /// Configuration.
    pub key: GroupKey,
    /// Statistics over the group's samples.
    pub summary: Summary,
}

/// Sorts summaries by [`GroupKey::compare`].
pub fn sort_summaries(rows: &mut [GroupSummary], order: &LanguageOrder) {
    rows.sort_by(|a, b| a.key.compare(&b.key, order));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(task: &str, lang: &str, variant: &str, size: &str) -> GroupKey {
        GroupKey::new(task, lang, variant, size)
    }

    #[test]
    fn test_scenario_two_rows_one_group() {
        let records: Vec<RawRecord> = ["100", "200"]
            .iter()
            .map(|t| {
                [
                    ("task", "fib"),
                    ("lang", "c"),
                    ("variant", ""),
                    ("n", "10"),
                    ("time_ns", *t),
                ]
                .into_iter()
                .collect()
            })
            .collect();

        let groups = Groups::from_records(&records);
        assert_eq!(groups.len(), 1);

        let rows = groups
            .summarize(Deviation::Population, &LanguageOrder::default())
            .unwrap();
        assert_eq!(rows[0].key, key("fib", "c", "", "10"));
        assert_eq!(rows[0].summary.count, 2);
        assert_eq!(rows[0].summary.mean, 150.0);
        assert_eq!(rows[0].summary.std_dev, 50.0);
    }

    #[test]
    fn test_sort_order() {
        let mut groups = Groups::new();
        for k in [
            key("sort", "go", "", "10"),
            key("fib", "zig", "", "10"),
            key("fib", "go", "", "10"),
            key("fib", "tenge", "b", "10"),
            key("fib", "tenge", "", "30"),
            key("fib", "tenge", "", "2"),
            key("fib", "tenge", "", "10"),
        ] {
            groups.observe(k, 1.0);
        }

        let rows = groups
            .summarize(Deviation::Population, &LanguageOrder::default())
            .unwrap();
        let keys: Vec<_> = rows.into_iter().map(|r| r.key).collect();
        assert_eq!(
            keys,
            vec![
                key("fib", "tenge", "", "10"),
                key("fib", "tenge", "", "2"),
                key("fib", "tenge", "", "30"),
                key("fib", "tenge", "b", "10"),
                key("fib", "go", "", "10"),
                key("fib", "zig", "", "10"),
                key("sort", "go", "", "10"),
            ]
        );
    }

    #[test]
    fn test_case_variants_are_distinct_groups() {
        let mut groups = Groups::new();
        groups.observe(key("fib", "C", "", ""), 1.0);
        groups.observe(key("fib", "c", "", ""), 2.0);
        assert_eq!(groups.len(), 2);

        let rows = groups
            .summarize(Deviation::Population, &LanguageOrder::default())
            .unwrap();
        assert_eq!(rows[0].key.lang, "C");
        assert_eq!(rows[1].key.lang, "c");
    }

    #[test]
    fn test_arrival_order_kept() {
        let groups: Groups = vec![
            (key("a", "", "", ""), 3.0),
            (key("a", "", "", ""), 1.0),
            (key("a", "", "", ""), 2.0),
        ]
        .into_iter()
        .collect();
        assert_eq!(groups.get(&key("a", "", "", "")), Some(&[3.0, 1.0, 2.0][..]));
    }
}
