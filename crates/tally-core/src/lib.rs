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

//! Statistical core for benchmark result aggregation.
//!
//! This crate holds the pieces shared by every Tally pipeline:
//!
//! - **Records**: [`RawRecord`] with tolerant, alias-based field extraction
//! - **Grouping**: [`Groups`] folds samples by [`GroupKey`]
//! - **Statistics**: [`summarize`] reduces samples to a [`Summary`]
//! - **Ordering**: [`LanguageOrder`] places language labels in a fixed
//!   preferred sequence
//!
//! # Examples
//!
//! ```
//! use tally_core::{Deviation, Groups, LanguageOrder, RawRecord};
//!
//! let rows: Vec<RawRecord> = vec![
//!     [("TASK", "fib"), ("LANG", "c"), ("N", "10"), ("TIME_NS", "100")]
//!         .into_iter()
//!         .collect(),
//!     [("task", "fib"), ("lang", "c"), ("size", "10"), ("avg_ns", "200")]
//!         .into_iter()
//!         .collect(),
//! ];
//!
//! let groups = Groups::from_records(&rows);
//! let summaries = groups
//!     .summarize(Deviation::Population, &LanguageOrder::default())
//!     .unwrap();
//!
//! assert_eq!(summaries.len(), 1);
//! assert_eq!(summaries[0].summary.mean, 150.0);
//! ```

pub mod error;
pub mod group;
pub mod ordering;
pub mod record;
pub mod stats;

pub use error::{Result, StatsError};
pub use group::{sort_summaries, GroupKey, GroupSummary, Groups};
pub use ordering::{LanguageOrder, LanguageRank, PREFERRED_LANGUAGES};
pub use record::{normalize_field_name, parse_sample, Field, RawRecord, TimeRule, TIME_RULES};
pub use stats::{summarize, Deviation, Summary};
