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

//! Delimiter detection for files of unknown dialect.
//!
//! Harnesses emit comma, tab, semicolon or pipe separated files without
//! saying which. The sniffer looks at the start of the file and picks the
//! candidate that splits every sampled line into the same number of fields.

/// Candidate delimiters, in tie-break order.
pub const DEFAULT_DELIMITERS: &[u8] = b",\t;|";

/// Number of leading bytes inspected.
pub const DEFAULT_SAMPLE_SIZE: usize = 4096;

/// Sniffer configuration.
///
/// # Examples
///
/// ```
/// use tally_csv::SniffConfig;
///
/// let config = SniffConfig::default().with_sample_size(1024);
/// assert_eq!(config.sample_size, 1024);
/// assert_eq!(config.fallback, b',');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SniffConfig {
    /// Candidate delimiters, highest priority first.
    pub delimiters: Vec<u8>,
    /// Leading bytes to inspect.
    pub sample_size: usize,
    /// Delimiter used when no candidate is consistent.
    pub fallback: u8,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_vec(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            fallback: b',',
        }
    }
}

impl SniffConfig {
    /// Sets the candidate delimiters.
    pub fn with_delimiters(mut self, delimiters: &[u8]) -> Self {
        self.delimiters = delimiters.to_vec();
        self
    }

    /// Sets the sample size in bytes.
    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

/// Detects the delimiter of `content`.
///
/// A candidate is consistent when it occurs the same, non-zero number of
/// times (outside double quotes) on every complete line of the sample. The
/// first consistent candidate wins; otherwise the candidate most frequent on
/// the header line; otherwise the fallback.
///
/// # Examples
///
/// ```
/// use tally_csv::{sniff_delimiter, SniffConfig};
///
/// let data = "task;lang;time_ns\nfib;c;100\n";
/// assert_eq!(sniff_delimiter(data, &SniffConfig::default()), b';');
/// ```
pub fn sniff_delimiter(content: &str, config: &SniffConfig) -> u8 {
    let lines = sample_lines(content, config.sample_size);
    if lines.is_empty() {
        return config.fallback;
    }

    for &candidate in &config.delimiters {
        let mut counts = lines.iter().map(|line| count_unquoted(line, candidate));
        if let Some(first) = counts.next() {
            if first > 0 && counts.all(|c| c == first) {
                return candidate;
            }
        }
    }

    config
        .delimiters
        .iter()
        .map(|&d| (d, count_unquoted(lines[0], d)))
        .filter(|&(_, count)| count > 0)
        .fold(None, |best: Option<(u8, usize)>, (d, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((d, count)),
        })
        .map(|(d, _)| d)
        .unwrap_or(config.fallback)
}

/// Non-empty lines of the sample. A trailing line cut by the sample
/// boundary is dropped unless it is the only one.
fn sample_lines(content: &str, sample_size: usize) -> Vec<&str> {
    let mut end = sample_size.min(content.len());
    while !content.is_char_boundary(end) {
        end -= 1;
    }
    let sample = &content[..end];
    let truncated = end < content.len() && !sample.ends_with('\n');

    let mut lines: Vec<&str> = sample
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect();

    if truncated && lines.len() > 1 {
        lines.pop();
    }
    lines
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for &b in line.as_bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sniff(content: &str) -> u8 {
        sniff_delimiter(content, &SniffConfig::default())
    }

    #[test]
    fn test_comma() {
        assert_eq!(sniff("task,lang,time_ns\nfib,c,100\nfib,go,200\n"), b',');
    }

    #[test]
    fn test_tab() {
        assert_eq!(sniff("task\tlang\ttime_ns\nfib\tc\t100\n"), b'\t');
    }

    #[test]
    fn test_pipe() {
        assert_eq!(sniff("task|lang\nfib|c\n"), b'|');
    }

    #[test]
    fn test_quoted_delimiters_ignored() {
        let data = "task;lang;note\nfib;c;\"a,b\"\nsort;go;\"c,d,e\"\n";
        assert_eq!(sniff(data), b';');
    }

    #[test]
    fn test_inconsistent_uses_header() {
        let data = "task;lang;time_ns\nfib;c\nsort;go;1;2\n";
        assert_eq!(sniff(data), b';');
    }

    #[test]
    fn test_single_column_falls_back() {
        assert_eq!(sniff("time_ns\n100\n200\n"), b',');
        assert_eq!(sniff(""), b',');
    }

    #[test]
    fn test_truncated_last_line_ignored() {
        let config = SniffConfig::default().with_sample_size(24);
        let data = "a;b;c\n1;2;3\n4;5;6\n7;8;9;10;11;12\n";
        assert_eq!(sniff_delimiter(data, &config), b';');
    }

    #[test]
    fn test_custom_candidates() {
        let config = SniffConfig::default().with_delimiters(b":");
        assert_eq!(sniff_delimiter("a:b\n1:2\n", &config), b':');
    }
}
