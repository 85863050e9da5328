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

//! Raw records and the tolerant field extractor.
//!
//! Benchmark harnesses disagree on column names (`TIME_NS`, `avg_ns`,
//! `time_us`, `rep3_ns`, ...). Each canonical field is resolved through an
//! ordered list of extraction rules; the first rule that yields a value wins.
//! Nothing here fails: identifiers default to an empty string and the timing
//! value defaults to `0.0`.

use crate::group::GroupKey;
use crate::stats::mean;
use tracing::debug;

/// Canonical identifier fields of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Benchmark task (`fib`, `sort`, ...).
    Task,
    /// Implementation language.
    Lang,
    /// Algorithmic variant.
    Variant,
    /// Problem size, kept as free-form text.
    Size,
}

impl Field {
    /// Column aliases, highest priority first.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Task => &["task"],
            Field::Lang => &["lang"],
            Field::Variant => &["variant", "var", "algo"],
            Field::Size => &["n", "size"],
        }
    }
}

/// One way of reading a timing value out of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRule {
    /// Column holding nanoseconds.
    Nanos(&'static str),
    /// Column holding microseconds, scaled by 1000.
    Micros(&'static str),
    /// Mean of every parseable column named `{prefix}*{suffix}`.
    RepetitionMean {
        /// Column name prefix.
        prefix: &'static str,
        /// Column name suffix.
        suffix: &'static str,
    },
}

/// Timing rules, highest priority first.
pub const TIME_RULES: &[TimeRule] = &[
    TimeRule::Nanos("time_ns"),
    TimeRule::Nanos("avg_ns"),
    TimeRule::Micros("time_us"),
    TimeRule::RepetitionMean {
        prefix: "rep",
        suffix: "_ns",
    },
];

impl TimeRule {
    /// Applies the rule, returning `None` when it does not match.
    pub fn apply(&self, record: &RawRecord) -> Option<f64> {
        match *self {
            TimeRule::Nanos(name) => record.get(name).and_then(parse_sample),
            TimeRule::Micros(name) => record
                .get(name)
                .and_then(parse_sample)
                .map(|us| us * 1000.0)
                .filter(|ns| ns.is_finite()),
            TimeRule::RepetitionMean { prefix, suffix } => {
                let reps: Vec<f64> = record
                    .fields()
                    .filter(|(k, _)| k.starts_with(prefix) && k.ends_with(suffix))
                    .filter_map(|(_, v)| parse_sample(v))
                    .collect();
                if reps.is_empty() {
                    None
                } else {
                    Some(mean(&reps))
                }
            }
        }
    }
}

/// Parses a timing value. Negative and non-finite numbers are rejected.
pub fn parse_sample(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            debug!(value = trimmed, "ignoring unparseable timing value");
            None
        }
    }
}

/// Normalizes a column name: surrounding whitespace removed, lower-cased.
pub fn normalize_field_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// One input row with normalized field names.
///
/// Field order is the column order of the source. Inserting a name that is
/// already present replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    fields: Vec<(String, String)>,
}

impl RawRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a field, normalizing its name.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        let name = normalize_field_name(name);
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Value of a normalized field name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates `(name, value)` pairs in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Resolves a canonical identifier: first alias present with a
    /// non-empty value, else `""`.
    pub fn field(&self, field: Field) -> &str {
        field
            .aliases()
            .iter()
            .filter_map(|alias| self.get(alias))
            .find(|v| !v.is_empty())
            .unwrap_or("")
    }

    /// Resolves the timing value in nanoseconds, `0.0` if no rule matches.
    pub fn time_ns(&self) -> f64 {
        TIME_RULES
            .iter()
            .find_map(|rule| rule.apply(self))
            .unwrap_or(0.0)
    }

    /// Group key of this record.
    pub fn group_key(&self) -> GroupKey {
        GroupKey::new(
            self.field(Field::Task),
            self.field(Field::Lang),
            self.field(Field::Variant),
            self.field(Field::Size),
        )
    }

    /// Group key and sample in one step.
    pub fn extract(&self) -> (GroupKey, f64) {
        (self.group_key(), self.time_ns())
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = RawRecord::new();
        for (k, v) in iter {
            record.insert(k.as_ref(), v);
        }
        record
    }
}
