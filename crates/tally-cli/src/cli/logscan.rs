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

//! Log-scan pipeline commands.

use crate::commands;
use crate::config::AnalyzeConfig;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;
use tally_report::Preset;

/// Log-scan pipeline commands.
#[derive(Subcommand)]
pub enum LogScanCommands {
    /// Analyze TIME_NS= result logs
    ///
    /// Scans the catalogue's `<benchmark>_<language>.txt` files, computes
    /// statistics and relative rankings, and writes a narrative Markdown
    /// report. Missing files are skipped.
    Analyze {
        /// Catalogue preset (comprehensive, final)
        #[arg(long, value_name = "PRESET", default_value_t = Preset::Final)]
        preset: Preset,

        /// Directory holding the result logs [default: per preset]
        #[arg(long, value_name = "DIR")]
        results_dir: Option<PathBuf>,

        /// Report path [default: <results-dir>/<preset report name>]
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

impl LogScanCommands {
    /// Execute the log-scan command.
    ///
    /// # Errors
    ///
    /// See [`commands::analyze`].
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            LogScanCommands::Analyze {
                preset,
                results_dir,
                output,
            } => {
                let mut config = AnalyzeConfig::new(preset);
                if let Some(dir) = results_dir {
                    config = config.with_results_dir(dir);
                }
                if let Some(path) = output {
                    config = config.with_output(path);
                }
                commands::analyze(&config).map(|_| ())
            }
        }
    }
}
