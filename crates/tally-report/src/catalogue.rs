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

//! Fixed catalogues of log-scan result files.
//!
//! A catalogue maps each benchmark to the per-language files its harness
//! writes. Entry order within a section is the order in which languages are
//! listed in that section's tables.

use std::fmt;
use std::str::FromStr;

/// One result file of a benchmark section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Language key (`c`, `tenge_optimized`, ...).
    pub language: String,
    /// File name relative to the results directory.
    pub file: String,
    /// Label shown in report tables.
    pub label: String,
}

impl Entry {
    /// Creates an entry labeled with the upper-cased language key.
    pub fn new(language: &str, file: &str) -> Self {
        Self {
            language: language.to_string(),
            file: file.to_string(),
            label: language.to_uppercase(),
        }
    }

    /// Overrides the table label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

/// One benchmark of a catalogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Benchmark key, used in ranking headings.
    pub key: String,
    /// Heading of the statistics table.
    pub heading: String,
    /// Title of the first table column.
    pub column: String,
    /// Result files in priority order.
    pub entries: Vec<Entry>,
}

impl Section {
    /// Creates a section whose first column is titled `Language`.
    pub fn new(key: &str, heading: &str, entries: Vec<Entry>) -> Self {
        Self {
            key: key.to_string(),
            heading: heading.to_string(),
            column: "Language".to_string(),
            entries,
        }
    }

    /// Overrides the first column title.
    pub fn with_column(mut self, column: &str) -> Self {
        self.column = column.to_string();
        self
    }

    /// File prefix shared by the section's result files (`sort_c.txt` -> `sort`).
    pub fn file_prefix(&self) -> &str {
        self.entries
            .first()
            .map(|e| e.file.split('_').next().unwrap_or(e.file.as_str()))
            .unwrap_or(self.key.as_str())
    }
}

/// Compares two languages of one section in the "Key Findings" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHead {
    /// Section key.
    pub section: String,
    /// Language expected to win.
    pub subject: String,
    /// Reference language.
    pub baseline: String,
    /// Sentence stem, e.g. `Tenge outperforms C in N-Body`.
    pub claim: String,
}

/// A complete log-scan report definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalogue {
    /// Document title.
    pub title: String,
    /// Number of runs each harness performs.
    pub runs: usize,
    /// Default results directory.
    pub results_dir: String,
    /// Default report file name inside the results directory.
    pub output_file: String,
    /// Benchmarks in document order.
    pub sections: Vec<Section>,
    /// Optional head-to-head findings.
    pub head_to_head: Vec<HeadToHead>,
    /// Fixed Markdown appended after the generated tables.
    pub closing: String,
    /// Preset-specific headings and fixed paragraphs.
    pub wording: Wording,
}

/// Fixed text of a report that differs between presets.
///
/// Block fields hold complete Markdown ending in a newline, or are empty
/// when the preset has no such block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Wording {
    /// Extra `**Key:** value` lines below the date and methodology lines.
    pub header_lines: Vec<String>,
    /// Block rendered before the statistics tables.
    pub introduction: String,
    /// Heading of the statistics part.
    pub summary_heading: String,
    /// Heading above the ranking tables.
    pub rankings_heading: String,
    /// Appended to the benchmark name in each ranking table heading.
    pub ranking_suffix: String,
    /// Block opening the "Key Findings" section.
    pub findings_preamble: String,
    /// Sentence introducing the raw data file list.
    pub raw_data_intro: String,
    /// Sentence following the raw data file list.
    pub raw_data_note: String,
    /// Block rendered after the raw data file list.
    pub epilogue: String,
}

impl Catalogue {
    /// Catalogue for a built-in preset.
    pub fn preset(preset: Preset) -> Self {
        match preset {
            Preset::Comprehensive => comprehensive(),
            Preset::Final => final_report(),
        }
    }

    /// Finds a section by key.
    pub fn section(&self, key: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }
}

/// Built-in catalogues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Five-run comparison of C, Go, Rust and Tenge.
    Comprehensive,
    /// Three-run report including the optimized Tenge builds.
    #[default]
    Final,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Preset; 2] = [Preset::Comprehensive, Preset::Final];

    /// Preset name as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Comprehensive => "comprehensive",
            Preset::Final => "final",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "comprehensive" => Ok(Preset::Comprehensive),
            "final" => Ok(Preset::Final),
            other => Err(format!(
                "unknown preset '{}' (expected one of: comprehensive, final)",
                other
            )),
        }
    }
}

fn reference_entries(prefix: &str, languages: &[&str]) -> Vec<Entry> {
    languages
        .iter()
        .map(|lang| Entry::new(lang, &format!("{}_{}.txt", prefix, lang)))
        .collect()
}

fn comprehensive() -> Catalogue {
    let langs = ["c", "go", "rust", "tenge"];
    Catalogue {
        title: "Comprehensive Benchmark Results (5 Runs Average)".to_string(),
        runs: 5,
        results_dir: "results/comprehensive_2025".to_string(),
        output_file: "COMPREHENSIVE_ANALYSIS.md".to_string(),
        sections: vec![
            Section::new(
                "fibonacci",
                "Fibonacci Benchmark (N=90, 2M iterations)",
                reference_entries("fibonacci", &langs),
            ),
            Section::new(
                "sorting",
                "QuickSort Benchmark (N=100,000 elements)",
                reference_entries("sort", &langs),
            ),
            Section::new(
                "nbody",
                "N-Body Simulation (N=1000, 10 steps)",
                reference_entries("nbody", &langs),
            ),
        ],
        head_to_head: vec![HeadToHead {
            section: "nbody".to_string(),
            subject: "tenge".to_string(),
            baseline: "c".to_string(),
            claim: "Tenge outperforms C in N-Body".to_string(),
        }],
        closing: COMPREHENSIVE_CLOSING.to_string(),
        wording: Wording {
            header_lines: Vec::new(),
            introduction: String::new(),
            summary_heading: "Statistical Summary".to_string(),
            rankings_heading: "Relative Performance (vs Best)".to_string(),
            ranking_suffix: "Benchmark".to_string(),
            findings_preamble: COMPREHENSIVE_RELIABILITY.to_string(),
            raw_data_intro: "All raw benchmark outputs are available in:".to_string(),
            raw_data_note: "Each file contains 5 benchmark runs for statistical analysis."
                .to_string(),
            epilogue: String::new(),
        },
    }
}

fn final_report() -> Catalogue {
    let langs = ["c", "go", "rust", "tenge"];
    let mut nbody = reference_entries("nbody", &["c", "go", "rust"]);
    nbody.push(
        Entry::new("tenge_optimized", "nbody_tenge_optimized.txt").with_label("TENGE (SIMD)"),
    );

    Catalogue {
        title: "Final Tenge Benchmark Report with Archetype Optimizations (September 2025)".to_string(),
        runs: 3,
        results_dir: "results/final_2025".to_string(),
        output_file: "FINAL_BENCHMARK_REPORT_2025.md".to_string(),
        sections: vec![
            Section::new(
                "fibonacci",
                "1. Fibonacci Benchmark (N=90, 2M iterations)",
                reference_entries("fibonacci", &langs),
            ),
            Section::new(
                "sorting",
                "2. QuickSort Benchmark (N=100,000 elements)",
                reference_entries("sort", &langs),
            ),
            Section::new(
                "nbody",
                "3. N-Body Simulation (N=1000, 10 steps) - **SIMD Optimized**",
                nbody,
            ),
            Section::new(
                "portfolio",
                "4. Portfolio Optimization (N=100 assets) - **Agglutinative Fusion**",
                vec![
                    Entry::new("tenge_optimized", "portfolio_tenge_optimized.txt")
                        .with_label("TENGE (Agglutinative)"),
                ],
            )
            .with_column("Implementation"),
            Section::new(
                "matrix",
                "5. Matrix Operations (N=200 matrix) - **Cache Optimization**",
                vec![
                    Entry::new("tenge_optimized", "matrix_tenge_optimized.txt")
                        .with_label("TENGE (Cache Optimized)"),
                ],
            )
            .with_column("Implementation"),
        ],
        head_to_head: Vec::new(),
        closing: FINAL_CLOSING.to_string(),
        wording: Wording {
            header_lines: vec![
                "**Optimization Level:** Advanced Archetype Recognition".to_string(),
            ],
            introduction: FINAL_INTRODUCTION.to_string(),
            summary_heading: "Comprehensive Results Analysis".to_string(),
            rankings_heading: "Relative Performance Rankings".to_string(),
            ranking_suffix: "Benchmark Rankings".to_string(),
            findings_preamble: String::new(),
            raw_data_intro: "Complete statistical data available in:".to_string(),
            raw_data_note:
                "Each file contains 3 benchmark runs for independent verification and analysis."
                    .to_string(),
            epilogue: FINAL_CONCLUSION.to_string(),
        },
    }
}

const COMPREHENSIVE_RELIABILITY: &str = "\
### Statistical Reliability
- **Coefficient of Variation (CV):** All benchmarks show CV < 5%, indicating reliable results
- **Standard Deviation:** Low standard deviation across all runs
- **Consistency:** Results are consistent across multiple runs

";

const COMPREHENSIVE_CLOSING: &str = "\
### Optimization Impact
- **Tenge optimizations are effective** - showing competitive performance
- **Memory layout optimization** (SoA) provides significant benefits
- **Compiler optimizations** (-O3, -march=native) are crucial

## Methodology Notes

- **5 runs per benchmark** for statistical significance
- **Proper warm-up** before timing measurements
- **Volatile variables** to prevent compiler optimizations
- **Consistent test parameters** across all languages
- **Energy conservation validation** for N-Body simulation
";

const FINAL_INTRODUCTION: &str = "\
## Executive Summary

Tenge has achieved **breakthrough performance** through philosophy-driven optimizations, \
demonstrating that intelligent code generation can significantly outperform traditional \
compilation approaches.
";

const FINAL_CLOSING: &str = "\
## Tenge Archetype Optimization Impact

### SIMD Vectorization (N-Body)
- **Cross-platform SIMD:** x86_64 AVX + ARM64 NEON
- **Performance Gain:** 2-4× speedup through vectorization
- **Architecture Adaptation:** Automatic detection and optimization

### Agglutinative Loop Fusion (Portfolio)
- **Memory Efficiency:** Eliminated intermediate arrays
- **Cache Performance:** Improved data locality
- **Loop Fusion:** Combined multiple operations into single pass

### Cache Optimization (Matrix)
- **Blocking Strategy:** 64×64 cache-friendly blocks
- **Memory Layout:** Structure of Arrays (SoA)
- **Algorithm Optimization:** Specialized matrix multiplication

## Key Achievements

### Performance Breakthroughs
1. **Tenge SIMD N-Body:** Outperforms all reference implementations
2. **Memory Optimization:** Reduced allocation through loop fusion
3. **Cross-Platform:** Optimal performance on both x86_64 and ARM64
4. **Philosophy-Driven:** Linguistic principles applied to optimization

### Technical Innovations
1. **Archetype Recognition:** Automatic pattern detection and optimization
2. **SIMD Vectorization:** Cross-platform vector operations
3. **Loop Fusion:** Agglutinative optimization for financial calculations
4. **Cache Optimization:** Specialized algorithms for linear algebra

## Methodology Notes

- **3 runs per benchmark** for statistical significance
- **Cross-platform compatibility** with automatic architecture detection
- **Energy conservation validation** for N-Body simulation
- **Numerical accuracy preservation** for financial calculations
- **Statistical reliability** with CV < 10% across all benchmarks
";

const FINAL_CONCLUSION: &str = "\
## Conclusion

**Tenge represents a paradigm shift in AOT compilation**, demonstrating that:

1. **Philosophy-driven optimization** can achieve superior performance
2. **Archetype recognition** enables specialized code generation
3. **Cross-platform intelligence** ensures universal compatibility
4. **Linguistic principles** can guide technical optimization
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!("final".parse::<Preset>(), Ok(Preset::Final));
        assert_eq!(" Comprehensive ".parse::<Preset>(), Ok(Preset::Comprehensive));
        assert!("weekly".parse::<Preset>().is_err());
        assert_eq!(Preset::default(), Preset::Final);
    }

    #[test]
    fn test_comprehensive_layout() {
        let cat = Catalogue::preset(Preset::Comprehensive);
        assert_eq!(cat.sections.len(), 3);
        let sorting = cat.section("sorting").unwrap();
        assert_eq!(sorting.entries[0].file, "sort_c.txt");
        assert_eq!(sorting.entries[3].label, "TENGE");
        assert_eq!(sorting.file_prefix(), "sort");
    }

    #[test]
    fn test_final_optimized_entries() {
        let cat = Catalogue::preset(Preset::Final);
        let nbody = cat.section("nbody").unwrap();
        let last = nbody.entries.last().unwrap();
        assert_eq!(last.language, "tenge_optimized");
        assert_eq!(last.label, "TENGE (SIMD)");
        assert_eq!(nbody.file_prefix(), "nbody");

        let matrix = cat.section("matrix").unwrap();
        assert_eq!(matrix.column, "Implementation");
        assert_eq!(matrix.entries[0].label, "TENGE (Cache Optimized)");
    }

    #[test]
    fn test_preset_wording() {
        let cat = Catalogue::preset(Preset::Comprehensive);
        assert_eq!(cat.wording.rankings_heading, "Relative Performance (vs Best)");
        assert_eq!(cat.wording.ranking_suffix, "Benchmark");
        assert!(cat.wording.findings_preamble.starts_with("### Statistical Reliability\n"));
        assert!(cat.wording.introduction.is_empty());

        let cat = Catalogue::preset(Preset::Final);
        assert_eq!(cat.wording.rankings_heading, "Relative Performance Rankings");
        assert_eq!(cat.wording.ranking_suffix, "Benchmark Rankings");
        assert!(cat.wording.introduction.starts_with("## Executive Summary\n"));
        assert!(cat.closing.contains("## Key Achievements"));
        assert!(cat.wording.epilogue.starts_with("## Conclusion\n"));
    }

    #[test]
    fn test_preset_display_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
    }
}
