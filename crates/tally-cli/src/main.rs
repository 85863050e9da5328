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

//! Tally Command Line Interface

use clap::Parser;
use tally_cli::cli::Commands;
use tally_cli::logging;
use std::process::ExitCode;

/// Tally - benchmark result aggregation
///
/// Folds benchmark harness output into summary tables and reports.
///
/// # Examples
///
/// ```bash
/// # Average several CSV runs into results_agg.csv and RESULTS_AGG.md
/// tally aggregate run1.csv run2.csv run3.csv
///
/// # Scan TIME_NS= logs and write the final narrative report
/// tally analyze --preset final
/// ```
#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Tally - benchmark result aggregation", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
