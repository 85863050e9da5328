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

//! Reading delimited result files into raw records.

use crate::error::{CsvError, Result};
use crate::sniff::{sniff_delimiter, SniffConfig};
use std::io::Read;
use tally_core::RawRecord;
use tracing::debug;

/// Parses delimited text into records.
///
/// The first row is the header. Column names are matched later through
/// [`RawRecord`]'s normalization, so `TIME_NS`, ` time_ns ` and `Time_Ns`
/// all land on the same field. Rows shorter than the header simply lack the
/// trailing fields; extra trailing values are ignored. A file without data
/// rows yields an empty list.
///
/// # Errors
///
/// Returns [`CsvError::InvalidHeader`] when the header row cannot be decoded
/// and [`CsvError::ParseError`] for undecodable data rows.
///
/// # Examples
///
/// ```
/// use tally_csv::{parse_records, SniffConfig};
///
/// let data = "TASK\tLANG\tTIME_NS\nfib\tc\t100\n";
/// let records = parse_records(data, &SniffConfig::default()).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].get("time_ns"), Some("100"));
/// ```
pub fn parse_records(content: &str, config: &SniffConfig) -> Result<Vec<RawRecord>> {
    let delimiter = sniff_delimiter(content, config);
    debug!(delimiter = %char::from(delimiter).escape_default(), "sniffed dialect");

    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(content.as_bytes());

    let headers = csv_reader
        .headers()
        .map_err(|e| CsvError::InvalidHeader(e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for result in csv_reader.records() {
        let row = result?;
        let record: RawRecord = headers.iter().zip(row.iter()).collect();
        records.push(record);
    }

    Ok(records)
}

/// Reads all of `reader` and parses it with [`parse_records`].
///
/// # Errors
///
/// Returns [`CsvError::Io`] if reading fails or the input is not UTF-8, and
/// any error of [`parse_records`].
pub fn read_records<R: Read>(mut reader: R, config: &SniffConfig) -> Result<Vec<RawRecord>> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_records(&content, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Field;

    fn parse(content: &str) -> Vec<RawRecord> {
        parse_records(content, &SniffConfig::default()).unwrap()
    }

    #[test]
    fn test_header_only_is_empty() {
        assert!(parse("task,lang,time_ns\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn test_columns_normalized() {
        let records = parse(" Task ,LANG,Time_NS\nfib,c,100\n");
        assert_eq!(records[0].field(Field::Task), "fib");
        assert_eq!(records[0].time_ns(), 100.0);
    }

    #[test]
    fn test_short_rows_lack_fields() {
        let records = parse("task,lang,variant,n,time_ns\nfib,c\n");
        assert_eq!(records[0].get("variant"), None);
        assert_eq!(records[0].time_ns(), 0.0);
    }

    #[test]
    fn test_long_rows_ignore_extra() {
        let records = parse("task,time_ns\nfib,5,extra,values\n");
        assert_eq!(records[0].len(), 2);
        assert_eq!(records[0].time_ns(), 5.0);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let records = parse("task,time_ns\r\nfib,5\r\n\r\nsort,6\r\n");
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_semicolon_dialect() {
        let records = parse("task;lang;avg_ns\nsort;rust;12.5\n");
        assert_eq!(records[0].field(Field::Lang), "rust");
        assert_eq!(records[0].time_ns(), 12.5);
    }

    #[test]
    fn test_read_records() {
        let data = b"task,time_us\nfib,2\n";
        let records = read_records(&data[..], &SniffConfig::default()).unwrap();
        assert_eq!(records[0].time_ns(), 2000.0);
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let data: &[u8] = &[0x74, 0x61, 0xff, 0x0a];
        assert!(matches!(
            read_records(data, &SniffConfig::default()),
            Err(CsvError::Io(_))
        ));
    }
}
