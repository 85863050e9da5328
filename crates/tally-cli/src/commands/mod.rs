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

//! CLI command implementations

mod aggregate;
mod analyze;

pub use aggregate::{aggregate, AggregateOutcome};
pub use analyze::analyze;

use crate::config::{max_file_size, MAX_FILE_SIZE_ENV};
use crate::error::CliError;
use colored::Colorize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before any memory
/// is allocated for them. The limit defaults to 1 GB and can be changed via
/// the `TALLY_MAX_FILE_SIZE` environment variable (in bytes).
///
/// # Errors
///
/// Returns `Err` if:
/// - The file metadata cannot be accessed
/// - The file size exceeds the maximum allowed size
/// - The file cannot be read or is not valid UTF-8
///
/// # Examples
///
/// ```no_run
/// use tally_cli::commands::read_file;
///
/// # fn main() -> Result<(), tally_cli::error::CliError> {
/// let content = read_file("run1.csv")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        debug!(env = MAX_FILE_SIZE_ENV, max, "input exceeds size limit");
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write a complete output file in one call and report it on stdout.
pub fn write_output(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|e| CliError::io_error(path, e))?;
    println!("{} Wrote {}", "✓".green().bold(), path.display());
    Ok(())
}

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent(path: &Path) -> Result<(), CliError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| CliError::io_error(parent, e))
        }
        _ => Ok(()),
    }
}
