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

//! End-to-end ingestion tests: result files in, normalized table out.

use std::fs;
use tally_core::{Deviation, Groups, LanguageOrder, RawRecord};
use tally_csv::{read_records, summaries_to_csv, SniffConfig};
use tempfile::NamedTempFile;

fn create_temp_file(content: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn aggregate(paths: &[&NamedTempFile]) -> String {
    let mut records: Vec<RawRecord> = Vec::new();
    for file in paths {
        let handle = fs::File::open(file.path()).expect("Failed to open temp file");
        records.extend(read_records(handle, &SniffConfig::default()).expect("valid CSV"));
    }
    let rows = Groups::from_records(&records)
        .summarize(Deviation::Population, &LanguageOrder::default())
        .expect("non-empty groups");
    summaries_to_csv(&rows).expect("CSV output")
}

#[test]
fn test_mixed_dialects_and_aliases() {
    let go = create_temp_file("TASK,LANG,ALGO,SIZE,AVG_NS\nsort,go,pdq,1000,400\n");
    let tenge = create_temp_file("task\tlang\tvar\tn\ttime_us\nsort\ttenge\tpdq\t1000\t0.3\n");
    let rust = create_temp_file("Task;Lang;Variant;N;rep1_ns;rep2_ns\nsort;rust;pdq;1000;340;360\n");

    let csv = aggregate(&[&go, &tenge, &rust]);
    assert_eq!(
        csv,
        "TASK,LANG,VARIANT,N,AVG_NS,STD_NS,COUNT\r\n\
         sort,tenge,pdq,1000,300,0,1\r\n\
         sort,rust,pdq,1000,350,0,1\r\n\
         sort,go,pdq,1000,400,0,1\r\n"
    );
}

#[test]
fn test_string_compared_sizes() {
    let file = create_temp_file("task,lang,n,time_ns\nfib,c,30,1\nfib,c,2,1\nfib,c,10,1\n");
    let csv = aggregate(&[&file]);
    let sizes: Vec<&str> = csv
        .lines()
        .skip(1)
        .map(|l| l.split(',').nth(3).unwrap_or(""))
        .collect();
    assert_eq!(sizes, vec!["10", "2", "30"]);
}

#[test]
fn test_unparseable_time_is_zero_sample() {
    let file = create_temp_file("task,lang,time_ns\nfib,c,abc\nfib,c,100\n");
    let csv = aggregate(&[&file]);
    assert!(csv.contains("fib,c,,,50,50,2"));
}

#[test]
fn test_duplicate_run_is_byte_identical() {
    let file = create_temp_file(
        "task,lang,variant,n,time_ns\nfib,go,,10,120\nfib,c,,10,100\nfib,c,,10,200\nsort,zig,radix,5,9\n",
    );
    let first = aggregate(&[&file]);
    let second = aggregate(&[&file]);
    assert_eq!(first.as_bytes(), second.as_bytes());
}
