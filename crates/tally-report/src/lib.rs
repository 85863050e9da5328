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

//! Markdown reporting for benchmark results.
//!
//! # Modules
//!
//! - `markdown`: grouped report for aggregated tabular results
//! - `scan`: `TIME_NS=` extraction from harness logs
//! - `catalogue`: fixed benchmark/language/file catalogues
//! - `narrative`: log-scan statistics, rankings and the narrative document
//! - `format`: number and label formatting

pub mod catalogue;
pub mod error;
pub mod format;
pub mod markdown;
pub mod narrative;
pub mod scan;

pub use catalogue::{Catalogue, Entry, HeadToHead, Preset, Section, Wording};
pub use error::{ReportError, Result};
pub use markdown::{render_aggregate_markdown, AGGREGATE_TITLE, EMPTY_CELL};
pub use narrative::{
    analyze, generation_timestamp, key_findings, render_narrative, Analysis, EntryResult,
    Ranking, SectionResult,
};
pub use scan::{extract_time_ns, scan_file, scan_samples};
