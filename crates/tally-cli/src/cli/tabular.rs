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

//! Tabular pipeline commands.

use crate::commands;
use crate::config::{AggregateConfig, DEFAULT_OUT_DIR};
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Tabular pipeline commands.
#[derive(Subcommand)]
pub enum TabularCommands {
    /// Average CSV benchmark runs
    ///
    /// Reads every input (comma, tab, semicolon or pipe separated), groups
    /// rows by task, language, variant and size, and writes
    /// `results_agg.csv` and `RESULTS_AGG.md` to the output directory.
    /// Missing inputs are skipped with a warning.
    Aggregate {
        /// Input CSV files
        #[arg(value_name = "FILES")]
        files: Vec<String>,

        /// Output directory
        #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
        out_dir: PathBuf,

        /// Also write the summaries as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Preferred language order, comma separated
        #[arg(long, value_name = "LANGS", value_delimiter = ',')]
        languages: Vec<String>,
    },
}

impl TabularCommands {
    /// Execute the tabular command.
    ///
    /// # Errors
    ///
    /// See [`commands::aggregate`].
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            TabularCommands::Aggregate {
                files,
                out_dir,
                json,
                languages,
            } => {
                let mut config = AggregateConfig::default()
                    .with_out_dir(out_dir)
                    .with_languages(&languages);
                if let Some(path) = json {
                    config = config.with_json(path);
                }
                commands::aggregate(&files, &config).map(|_| ())
            }
        }
    }
}
