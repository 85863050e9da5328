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

//! Command configuration.
//!
//! Every setting has a default matching the conventional benchmark layout;
//! command-line flags override them through the `with_*` builders.

use std::path::{Path, PathBuf};
use tally_core::LanguageOrder;
use tally_csv::SniffConfig;
use tally_report::{Catalogue, Preset};

/// Default maximum input size (1 GB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`], in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "TALLY_MAX_FILE_SIZE";

/// Default output directory of the tabular pipeline.
pub const DEFAULT_OUT_DIR: &str = "benchmarks/results";

/// Normalized table file name.
pub const AGGREGATE_CSV_FILE: &str = "results_agg.csv";

/// Grouped Markdown report file name.
pub const AGGREGATE_MARKDOWN_FILE: &str = "RESULTS_AGG.md";

/// Maximum input size from [`MAX_FILE_SIZE_ENV`], falling back to the
/// default when unset or invalid.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Settings of the `aggregate` command.
///
/// # Examples
///
/// ```
/// use tally_cli::config::AggregateConfig;
///
/// let config = AggregateConfig::default().with_out_dir("out");
/// assert!(config.csv_path().ends_with("results_agg.csv"));
/// ```
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    /// Directory receiving both output files.
    pub out_dir: PathBuf,
    /// File name of the normalized table.
    pub csv_file: String,
    /// File name of the Markdown report.
    pub markdown_file: String,
    /// Optional JSON export of the summaries.
    pub json_path: Option<PathBuf>,
    /// Delimiter detection settings.
    pub sniff: SniffConfig,
    /// Language ordering of rows and report columns.
    pub order: LanguageOrder,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            csv_file: AGGREGATE_CSV_FILE.to_string(),
            markdown_file: AGGREGATE_MARKDOWN_FILE.to_string(),
            json_path: None,
            sniff: SniffConfig::default(),
            order: LanguageOrder::default(),
        }
    }
}

impl AggregateConfig {
    /// Sets the output directory.
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Enables the JSON export.
    pub fn with_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.json_path = Some(path.into());
        self
    }

    /// Replaces the preferred language sequence. An empty list keeps the default.
    pub fn with_languages(mut self, languages: &[String]) -> Self {
        if !languages.is_empty() {
            self.order = LanguageOrder::new(languages);
        }
        self
    }

    /// Path of the normalized table.
    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(&self.csv_file)
    }

    /// Path of the Markdown report.
    pub fn markdown_path(&self) -> PathBuf {
        self.out_dir.join(&self.markdown_file)
    }
}

/// Settings of the `analyze` command.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeConfig {
    /// Catalogue preset.
    pub preset: Preset,
    /// Directory holding the result logs; the preset's directory when unset.
    pub results_dir: Option<PathBuf>,
    /// Report path; `<results_dir>/<preset output file>` when unset.
    pub output: Option<PathBuf>,
}

impl AnalyzeConfig {
    /// Creates settings for a preset.
    pub fn new(preset: Preset) -> Self {
        Self {
            preset,
            ..Self::default()
        }
    }

    /// Overrides the results directory.
    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(dir.into());
        self
    }

    /// Overrides the report path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// The catalogue selected by the preset.
    pub fn catalogue(&self) -> Catalogue {
        Catalogue::preset(self.preset)
    }

    /// Resolved results directory.
    pub fn results_dir(&self, catalogue: &Catalogue) -> PathBuf {
        self.results_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&catalogue.results_dir))
    }

    /// Resolved report path.
    pub fn output_path(&self, catalogue: &Catalogue, results_dir: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| results_dir.join(&catalogue.output_file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_defaults() {
        let config = AggregateConfig::default();
        assert_eq!(
            config.csv_path(),
            Path::new("benchmarks/results/results_agg.csv")
        );
        assert_eq!(
            config.markdown_path(),
            Path::new("benchmarks/results/RESULTS_AGG.md")
        );
        assert!(config.json_path.is_none());
    }

    #[test]
    fn test_custom_languages() {
        let config = AggregateConfig::default().with_languages(&["go".to_string()]);
        assert_eq!(config.order.preferred(), &["go".to_string()]);

        let config = AggregateConfig::default().with_languages(&[]);
        assert_eq!(config.order, LanguageOrder::default());
    }

    #[test]
    fn test_analyze_paths_follow_preset() {
        let config = AnalyzeConfig::new(Preset::Comprehensive);
        let catalogue = config.catalogue();
        let dir = config.results_dir(&catalogue);
        assert_eq!(dir, Path::new("results/comprehensive_2025"));
        assert_eq!(
            config.output_path(&catalogue, &dir),
            Path::new("results/comprehensive_2025/COMPREHENSIVE_ANALYSIS.md")
        );
    }

    #[test]
    fn test_analyze_overrides() {
        let config = AnalyzeConfig::new(Preset::Final)
            .with_results_dir("logs")
            .with_output("report.md");
        let catalogue = config.catalogue();
        let dir = config.results_dir(&catalogue);
        assert_eq!(dir, Path::new("logs"));
        assert_eq!(config.output_path(&catalogue, &dir), Path::new("report.md"));
    }
}
