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

//! Aggregate command - average CSV runs into a table and a report.

use super::{ensure_parent, read_file, write_output};
use crate::config::AggregateConfig;
use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use tally_core::{Deviation, GroupSummary, Groups, RawRecord};
use tally_csv::{parse_records, summaries_to_csv};
use tally_report::render_aggregate_markdown;
use tracing::{debug, info, warn};

/// What a successful aggregation produced.
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// Rows read across all inputs.
    pub rows: usize,
    /// Grouped summaries in report order.
    pub summaries: Vec<GroupSummary>,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Aggregate benchmark CSV files.
///
/// Every input is read and every output rendered before anything is
/// written, so a failed run leaves no output behind.
///
/// # Errors
///
/// - [`CliError::Usage`] when `files` is empty
/// - [`CliError::NoRows`] when no rows were read from any input
/// - I/O or CSV errors for inputs that exist but cannot be read
pub fn aggregate(files: &[String], config: &AggregateConfig) -> Result<AggregateOutcome, CliError> {
    if files.is_empty() {
        return Err(CliError::aggregate_usage());
    }

    let records = read_inputs(files, config)?;
    if records.is_empty() {
        return Err(CliError::NoRows);
    }

    let groups = Groups::from_records(&records);
    let summaries = groups.summarize(Deviation::Population, &config.order)?;
    info!(rows = records.len(), groups = summaries.len(), "aggregated");

    let csv = summaries_to_csv(&summaries).map_err(|e| CliError::csv(config.csv_path(), e))?;
    let markdown = render_aggregate_markdown(&summaries, &config.order);
    let json = match &config.json_path {
        Some(path) => Some((path.clone(), serde_json::to_string_pretty(&summaries)?)),
        None => None,
    };

    fs::create_dir_all(&config.out_dir).map_err(|e| CliError::io_error(&config.out_dir, e))?;

    let mut written = Vec::new();
    let csv_path = config.csv_path();
    write_output(&csv_path, &csv)?;
    written.push(csv_path);

    let markdown_path = config.markdown_path();
    write_output(&markdown_path, &markdown)?;
    written.push(markdown_path);

    if let Some((path, json)) = json {
        ensure_parent(&path)?;
        write_output(&path, &json)?;
        written.push(path);
    }

    Ok(AggregateOutcome {
        rows: records.len(),
        summaries,
        written,
    })
}

fn read_inputs(files: &[String], config: &AggregateConfig) -> Result<Vec<RawRecord>, CliError> {
    let mut records = Vec::new();
    for file in files {
        let path = Path::new(file);
        if !path.exists() {
            warn!(path = %file, "input not found, skipping");
            continue;
        }

        let content = read_file(path)?;
        let rows = parse_records(&content, &config.sniff).map_err(|e| CliError::csv(path, e))?;
        debug!(path = %file, rows = rows.len(), "read input");
        records.extend(rows);
    }
    Ok(records)
}
