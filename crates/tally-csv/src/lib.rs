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

//! Delimited benchmark result ingestion and normalized table output.
//!
//! # Features
//!
//! - **Dialect sniffing**: comma, tab, semicolon and pipe separated inputs
//! - **Lenient ingestion**: ragged rows, arbitrary column casing
//! - **Normalized output**: `TASK, LANG, VARIANT, N, AVG_NS, STD_NS, COUNT`
//!
//! # Examples
//!
//! ```
//! use tally_core::{Deviation, Groups, LanguageOrder};
//! use tally_csv::{parse_records, summaries_to_csv, SniffConfig};
//!
//! let data = "TASK|LANG|N|TIME_NS\nfib|c|10|100\nfib|c|10|200\n";
//! let records = parse_records(data, &SniffConfig::default()).unwrap();
//! let rows = Groups::from_records(&records)
//!     .summarize(Deviation::Population, &LanguageOrder::default())
//!     .unwrap();
//!
//! let csv = summaries_to_csv(&rows).unwrap();
//! assert!(csv.contains("fib,c,,10,150,50,2"));
//! ```

mod error;
mod reader;
mod sniff;
mod writer;

pub use error::{CsvError, Result};
pub use reader::{parse_records, read_records};
pub use sniff::{sniff_delimiter, SniffConfig, DEFAULT_DELIMITERS, DEFAULT_SAMPLE_SIZE};
pub use writer::{
    format_rounded, summaries_to_csv, write_summaries, WriteConfig, NORMALIZED_COLUMNS,
};
