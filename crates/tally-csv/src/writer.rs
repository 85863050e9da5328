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

//! Normalized aggregate table output.

use crate::error::{CsvError, Result};
use std::io::Write;
use tally_core::GroupSummary;

/// Canonical output columns.
pub const NORMALIZED_COLUMNS: [&str; 7] =
    ["TASK", "LANG", "VARIANT", "N", "AVG_NS", "STD_NS", "COUNT"];

/// Writer configuration.
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Field delimiter (default `,`).
    pub delimiter: u8,
    /// Record terminator (default CRLF, matching spreadsheet-style CSV).
    pub terminator: csv::Terminator,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            terminator: csv::Terminator::CRLF,
        }
    }
}

/// Formats a value rounded to the nearest integer.
pub fn format_rounded(value: f64) -> String {
    format!("{:.0}", value)
}

/// Writes one row per group: identifiers, rounded mean and standard
/// deviation, sample count. Rows are written in the order given.
///
/// # Errors
///
/// Returns [`CsvError::WriteError`] if the underlying writer fails.
pub fn write_summaries<W: Write>(
    rows: &[GroupSummary],
    writer: W,
    config: &WriteConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .terminator(config.terminator)
        .from_writer(writer);

    wtr.write_record(NORMALIZED_COLUMNS)
        .map_err(|e| CsvError::WriteError(format!("Failed to write CSV header: {}", e)))?;

    for row in rows {
        let record = [
            row.key.task.clone(),
            row.key.lang.clone(),
            row.key.variant.clone(),
            row.key.size.clone(),
            format_rounded(row.summary.mean),
            format_rounded(row.summary.std_dev),
            row.summary.count.to_string(),
        ];
        wtr.write_record(&record).map_err(|e| {
            CsvError::WriteError(format!(
                "Failed to write CSV record for task '{}': {}",
                row.key.task, e
            ))
        })?;
    }

    wtr.flush()
        .map_err(|e| CsvError::WriteError(format!("Failed to flush CSV writer: {}", e)))?;

    Ok(())
}

/// Renders the normalized table into a string.
///
/// # Examples
///
/// ```
/// use tally_core::{Deviation, GroupKey, Groups, LanguageOrder};
/// use tally_csv::summaries_to_csv;
///
/// let mut groups = Groups::new();
/// groups.observe(GroupKey::new("fib", "c", "", "10"), 100.0);
/// groups.observe(GroupKey::new("fib", "c", "", "10"), 200.0);
/// let rows = groups
///     .summarize(Deviation::Population, &LanguageOrder::default())
///     .unwrap();
///
/// let csv = summaries_to_csv(&rows).unwrap();
/// assert_eq!(
///     csv,
///     "TASK,LANG,VARIANT,N,AVG_NS,STD_NS,COUNT\r\nfib,c,,10,150,50,2\r\n"
/// );
/// ```
pub fn summaries_to_csv(rows: &[GroupSummary]) -> Result<String> {
    let mut buffer = Vec::new();
    write_summaries(rows, &mut buffer, &WriteConfig::default())?;
    String::from_utf8(buffer)
        .map_err(|e| CsvError::WriteError(format!("Invalid UTF-8 in CSV output: {}", e)))
}
