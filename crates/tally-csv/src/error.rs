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

//! Error types for delimited input and output.

use thiserror::Error;

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

/// CSV ingestion and output errors.
///
/// # Examples
///
/// ```
/// use tally_csv::CsvError;
///
/// let err = CsvError::ParseError {
///     line: 3,
///     message: "invalid UTF-8".to_string(),
/// };
/// assert_eq!(err.to_string(), "CSV parse error at line 3: invalid UTF-8");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// A record could not be decoded.
    #[error("CSV parse error at line {line}: {message}")]
    ParseError {
        /// Line number where the error occurred (1-based).
        line: u64,
        /// Detailed error message.
        message: String,
    },

    /// The header row could not be read.
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Writing the normalized table failed.
    #[error("CSV write error: {0}")]
    WriteError(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        CsvError::ParseError {
            line,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_header_display() {
        let err = CsvError::InvalidHeader("empty".to_string());
        assert_eq!(err.to_string(), "Invalid header: empty");
    }

    #[test]
    fn test_io_conversion() {
        let err: CsvError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, CsvError::Io(_)));
        assert!(err.to_string().contains("boom"));
    }
}
