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

//! Timing extraction from line-oriented harness logs.
//!
//! Harnesses print one `TIME_NS=<integer>` token per run, mixed with other
//! output. Lines without a token are noise.

use crate::error::{ReportError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tally_core::{summarize, Deviation, Summary};
use tracing::debug;

fn time_token() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"TIME_NS=(\d+)").expect("valid TIME_NS pattern"))
}

/// Extracts the first `TIME_NS=` value of a line.
///
/// A zero reading, or one too large for `u64`, counts as no token.
///
/// ```
/// use tally_report::extract_time_ns;
///
/// assert_eq!(extract_time_ns("run1 TIME_NS=100"), Some(100));
/// assert_eq!(extract_time_ns("noise"), None);
/// assert_eq!(extract_time_ns("TIME_NS=0"), None);
/// ```
pub fn extract_time_ns(line: &str) -> Option<u64> {
    let captures = time_token().captures(line)?;
    match captures[1].parse::<u64>() {
        Ok(0) => None,
        Ok(value) => Some(value),
        Err(e) => {
            debug!(token = &captures[1], error = %e, "ignoring oversized TIME_NS token");
            None
        }
    }
}

/// Collects every sample of a log, in line order.
pub fn scan_samples(content: &str) -> Vec<f64> {
    content
        .lines()
        .filter_map(|line| extract_time_ns(line.trim()))
        .map(|ns| ns as f64)
        .collect()
}

/// Reads and summarizes one log with the unbiased standard deviation.
///
/// Returns `Ok(None)` when the file does not exist or holds no tokens.
///
/// # Errors
///
/// Returns [`ReportError::Io`] when an existing file cannot be read.
pub fn scan_file(path: &Path) -> Result<Option<Summary>> {
    if !path.exists() {
        debug!(path = %path.display(), "result file absent");
        return Ok(None);
    }

    let bytes = fs::read(path).map_err(|e| ReportError::io_error(path, e))?;
    let content = String::from_utf8_lossy(&bytes);
    let samples = scan_samples(&content);
    if samples.is_empty() {
        debug!(path = %path.display(), "no TIME_NS tokens");
        return Ok(None);
    }

    Ok(Some(summarize(&samples, Deviation::Sample)?))
}
