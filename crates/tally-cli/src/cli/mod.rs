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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by pipeline:
//!
//! - `tabular`: CSV aggregation (`aggregate`)
//! - `logscan`: `TIME_NS=` log analysis (`analyze`)

mod logscan;
mod tabular;

use crate::error::CliError;
use clap::Subcommand;

pub use logscan::LogScanCommands;
pub use tabular::TabularCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Tabular (aggregate)
/// └── LogScan (analyze)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use tally_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Tabular commands - flattened to appear at top level
    #[command(flatten)]
    Tabular(TabularCommands),

    // Log-scan commands - flattened to appear at top level
    #[command(flatten)]
    LogScan(LogScanCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] whose [`CliError::exit_code`] becomes the
    /// process exit status.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Tabular(cmd) => cmd.execute(),
            Commands::LogScan(cmd) => cmd.execute(),
        }
    }
}
