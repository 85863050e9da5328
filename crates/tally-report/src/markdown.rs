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

//! Grouped Markdown report for aggregated tabular results.
//!
//! One section per task; inside it one table whose rows are the distinct
//! `(size, variant)` combinations and whose columns are the languages.

use crate::format::{capitalize, format_integer};
use std::collections::BTreeSet;
use tally_core::{GroupSummary, LanguageOrder};

/// Marker for empty cells and empty variants.
pub const EMPTY_CELL: &str = "—";

/// Title of the aggregated report.
pub const AGGREGATE_TITLE: &str = "Aggregated Benchmarks (averaged across provided CSVs)";

/// Renders the grouped report.
///
/// `rows` must already be in report order (as returned by
/// [`tally_core::Groups::summarize`]); sections follow the order in which
/// tasks first appear. Columns are the full preferred language sequence
/// followed by any other languages present, lexicographically.
///
/// # Examples
///
/// ```
/// use tally_core::{Deviation, GroupKey, Groups, LanguageOrder};
/// use tally_report::render_aggregate_markdown;
///
/// let order = LanguageOrder::default();
/// let mut groups = Groups::new();
/// groups.observe(GroupKey::new("fib", "c", "", "10"), 100.0);
/// groups.observe(GroupKey::new("fib", "c", "", "10"), 200.0);
/// let rows = groups.summarize(Deviation::Population, &order).unwrap();
///
/// let md = render_aggregate_markdown(&rows, &order);
/// assert!(md.contains("| 10 | — | — | 150 ns ± 50 | — | — |"));
/// ```
pub fn render_aggregate_markdown(rows: &[GroupSummary], order: &LanguageOrder) -> String {
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", AGGREGATE_TITLE));
    let ordered: Vec<String> = order.preferred().iter().map(|l| capitalize(l)).collect();
    md.push_str(&format!(
        "_Language columns ordered as: {}._\n\n",
        ordered.join(" → ")
    ));

    for (task, items) in sections(rows) {
        md.push_str(&format!("## {}\n\n", task));

        let languages = order.columns(items.iter().map(|r| r.key.lang.as_str()));

        let mut header = vec!["N".to_string(), "Variant".to_string()];
        header.extend(languages.iter().map(|l| capitalize(l)));
        md.push_str(&format!("| {} |\n", header.join(" | ")));
        md.push_str(&format!("|{}|\n", vec!["---"; header.len()].join("|")));

        let combos: BTreeSet<(&str, &str)> = items
            .iter()
            .map(|r| (r.key.size.as_str(), r.key.variant.as_str()))
            .collect();

        for (size, variant) in combos {
            let mut cells = vec![
                size.to_string(),
                if variant.is_empty() {
                    EMPTY_CELL.to_string()
                } else {
                    variant.to_string()
                },
            ];

            for lang in &languages {
                let found = items.iter().find(|r| {
                    r.key.size == size
                        && r.key.variant == variant
                        && r.key.lang.to_lowercase() == *lang
                });
                cells.push(match found {
                    Some(r) => cell(r),
                    None => EMPTY_CELL.to_string(),
                });
            }

            md.push_str(&format!("| {} |\n", cells.join(" | ")));
        }
        md.push('\n');
    }

    md
}

fn cell(row: &GroupSummary) -> String {
    let mean = format_integer(row.summary.mean);
    let std_dev = format_integer(row.summary.std_dev);
    if std_dev == "0" {
        format!("{} ns", mean)
    } else {
        format!("{} ns ± {}", mean, std_dev)
    }
}

/// Splits rows into consecutive per-task runs, in first-seen task order.
fn sections(rows: &[GroupSummary]) -> Vec<(&str, Vec<&GroupSummary>)> {
    let mut out: Vec<(&str, Vec<&GroupSummary>)> = Vec::new();
    for row in rows {
        match out.iter_mut().find(|(task, _)| *task == row.key.task) {
            Some((_, items)) => items.push(row),
            None => out.push((row.key.task.as_str(), vec![row])),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Deviation, GroupKey, Groups};

    fn render(obs: &[(GroupKey, f64)]) -> String {
        let order = LanguageOrder::default();
        let groups: Groups = obs.iter().cloned().collect();
        let rows = groups.summarize(Deviation::Population, &order).unwrap();
        render_aggregate_markdown(&rows, &order)
    }

    #[test]
    fn test_header_and_order_line() {
        let md = render(&[]);
        assert!(md.starts_with("# Aggregated Benchmarks (averaged across provided CSVs)\n\n"));
        assert!(md.contains("_Language columns ordered as: Tenge → C → Rust → Go._"));
        assert!(!md.contains("## "));
    }

    #[test]
    fn test_table_layout() {
        let md = render(&[
            (GroupKey::new("sort", "rust", "radix", "1000"), 50.0),
            (GroupKey::new("sort", "tenge", "pdq", "1000"), 40.0),
            (GroupKey::new("sort", "go", "pdq", "1000"), 70.0),
            (GroupKey::new("sort", "go", "pdq", "1000"), 90.0),
        ]);
        assert!(md.contains("## sort\n\n| N | Variant | Tenge | C | Rust | Go |\n|---|---|---|---|---|---|\n"));
        assert!(md.contains("| 1000 | pdq | 40 ns | — | — | 80 ns ± 10 |\n"));
        assert!(md.contains("| 1000 | radix | — | — | 50 ns | — |\n"));
    }

    #[test]
    fn test_rows_sorted_by_string_size() {
        let md = render(&[
            (GroupKey::new("fib", "c", "", "30"), 1.0),
            (GroupKey::new("fib", "c", "", "2"), 1.0),
            (GroupKey::new("fib", "c", "", "10"), 1.0),
        ]);
        let p10 = md.find("| 10 |").unwrap();
        let p2 = md.find("| 2 |").unwrap();
        let p30 = md.find("| 30 |").unwrap();
        assert!(p10 < p2 && p2 < p30);
    }

    #[test]
    fn test_extra_languages_appended() {
        let md = render(&[
            (GroupKey::new("fib", "Zig", "", "1"), 5.0),
            (GroupKey::new("fib", "zig", "", "1"), 6.0),
            (GroupKey::new("fib", "python", "", "1"), 7.0),
        ]);
        assert!(md.contains("| N | Variant | Tenge | C | Rust | Go | Python | Zig |"));
        // "Zig" and "zig" share a column; the first in report order fills it.
        assert!(md.contains("| 1 | — | — | — | — | — | 7 ns | 5 ns |"));
    }

    #[test]
    fn test_sections_per_task() {
        let md = render(&[
            (GroupKey::new("sort", "c", "", "1"), 1.0),
            (GroupKey::new("fib", "c", "", "1"), 1.0),
        ]);
        let fib = md.find("## fib").unwrap();
        let sort = md.find("## sort").unwrap();
        assert!(fib < sort);
    }
}
