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

//! Tally CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Tabular
//!
//! - **aggregate**: Average CSV benchmark runs into a normalized table and a
//!   grouped Markdown report
//!
//! ## Log scan
//!
//! - **analyze**: Scan `TIME_NS=` harness logs and write a narrative report
//!   with relative-performance rankings
//!
//! # Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Usage error or I/O failure |
//! | 2 | No rows were read from any input |

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
