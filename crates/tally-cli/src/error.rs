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

//! Structured error types for the Tally CLI.
//!
//! Every command returns `Result<T, CliError>`; [`CliError::exit_code`] maps
//! each failure to the process exit status.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Usage line of the `aggregate` command.
pub const AGGREGATE_USAGE: &str = "Usage: tally aggregate <csv1> <csv2> <csv3> ...";

/// The main error type for Tally CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use tally_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// No input files were given.
    #[error("{0}")]
    Usage(String),

    /// Every input was missing or empty.
    #[error("no rows read from inputs")]
    NoRows,

    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Delimited input could not be decoded, or the table could not be written.
    #[error("CSV error in '{path}': {message}")]
    Csv {
        /// The file path involved
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Statistical reduction failed.
    #[error("Statistics error: {0}")]
    Stats(String),

    /// Log-scan report generation failed.
    #[error("Report error: {0}")]
    Report(String),

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a CSV error with file path context.
    pub fn csv(path: impl Into<PathBuf>, source: tally_csv::CsvError) -> Self {
        Self::Csv {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create the usage error of the `aggregate` command.
    pub fn aggregate_usage() -> Self {
        Self::Usage(AGGREGATE_USAGE.to_string())
    }

    /// Process exit code for this error.
    ///
    /// ```
    /// use tally_cli::error::CliError;
    ///
    /// assert_eq!(CliError::aggregate_usage().exit_code(), 1);
    /// assert_eq!(CliError::NoRows.exit_code(), 2);
    /// ```
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::NoRows => 2,
            _ => 1,
        }
    }
}

impl From<tally_core::StatsError> for CliError {
    fn from(source: tally_core::StatsError) -> Self {
        Self::Stats(source.to_string())
    }
}

impl From<tally_report::ReportError> for CliError {
    fn from(source: tally_report::ReportError) -> Self {
        Self::Report(source.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_display() {
        assert_eq!(CliError::aggregate_usage().to_string(), AGGREGATE_USAGE);
    }

    #[test]
    fn test_no_rows_display() {
        assert_eq!(CliError::NoRows.to_string(), "no rows read from inputs");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::aggregate_usage().exit_code(), 1);
        assert_eq!(CliError::NoRows.exit_code(), 2);
        let io = CliError::io_error("a.csv", io::Error::new(io::ErrorKind::Other, "x"));
        assert_eq!(io.exit_code(), 1);
    }

    #[test]
    fn test_file_too_large_display() {
        let err = CliError::file_too_large("big.csv", 200_000_000, 100 * 1024 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("big.csv"));
        assert!(msg.contains("200000000 bytes"));
        assert!(msg.contains("100 MB"));
    }

    #[test]
    fn test_stats_conversion() {
        let err: CliError = tally_core::StatsError::EmptySamples.into();
        assert!(matches!(err, CliError::Stats(_)));
    }

    #[test]
    fn test_error_cloning() {
        let err = CliError::io_error("x.csv", io::Error::new(io::ErrorKind::NotFound, "not found"));
        assert_eq!(err.to_string(), err.clone().to_string());
    }
}
