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

//! Error types for statistical reduction.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors raised by the statistical reducer.
///
/// Callers never construct an empty group, so hitting one of these means a
/// bug upstream rather than bad input data.
///
/// # Examples
///
/// ```
/// use tally_core::{summarize, Deviation, StatsError};
///
/// let err = summarize(&[], Deviation::Population).unwrap_err();
/// assert_eq!(err, StatsError::EmptySamples);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// A summary was requested for a group with no samples.
    #[error("cannot summarize an empty sample list")]
    EmptySamples,
}
