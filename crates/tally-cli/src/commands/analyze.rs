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

//! Analyze command - narrative report over `TIME_NS=` result logs.

use super::{ensure_parent, write_output};
use crate::config::AnalyzeConfig;
use crate::error::CliError;
use std::path::PathBuf;
use tally_report::{generation_timestamp, render_narrative};
use tracing::{info, warn};

/// Scan the preset's result logs and write the narrative report.
///
/// Missing logs are skipped; the report is written even when none exist.
/// Returns the path of the written report.
///
/// # Errors
///
/// Returns an error if a present log cannot be read or the report cannot be
/// written.
pub fn analyze(config: &AnalyzeConfig) -> Result<PathBuf, CliError> {
    let catalogue = config.catalogue();
    let results_dir = config.results_dir(&catalogue);
    info!(preset = %config.preset, dir = %results_dir.display(), "analyzing results");

    let analysis = tally_report::analyze(&catalogue, &results_dir)?;
    if analysis.files_found() == 0 {
        warn!(dir = %results_dir.display(), "no result files found");
    }

    let report = render_narrative(&analysis, &generation_timestamp());
    let output = config.output_path(&catalogue, &results_dir);
    ensure_parent(&output)?;
    write_output(&output, &report)?;
    Ok(output)
}
