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

//! Narrative Markdown report for log-scan results.

use crate::catalogue::{Catalogue, Section};
use crate::error::Result;
use crate::format::{format_thousands, title_case};
use crate::scan::scan_file;
use chrono::Local;
use std::path::Path;
use tally_core::Summary;
use tracing::{debug, info};

/// Summary of one present result file.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryResult {
    /// Language key.
    pub language: String,
    /// Table label.
    pub label: String,
    /// Statistics over the file's samples.
    pub summary: Summary,
}

/// Results of one catalogue section. Absent files are simply missing.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    /// Section definition.
    pub section: Section,
    /// Present entries, in section priority order.
    pub entries: Vec<EntryResult>,
}

impl SectionResult {
    /// Lowest mean of the section.
    pub fn fastest_mean(&self) -> Option<f64> {
        self.entries
            .iter()
            .map(|e| e.summary.mean)
            .reduce(f64::min)
    }

    /// Relative performance of every entry against the fastest one.
    pub fn rankings(&self) -> Vec<Ranking> {
        let Some(fastest) = self.fastest_mean() else {
            return Vec::new();
        };
        self.entries
            .iter()
            .map(|e| Ranking {
                label: e.label.clone(),
                relative: e.summary.speed_relative_to(fastest),
                is_fastest: e.summary.mean == fastest,
            })
            .collect()
    }

    fn entry(&self, language: &str) -> Option<&EntryResult> {
        self.entries.iter().find(|e| e.language == language)
    }
}

/// One row of a relative-performance table.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// Table label.
    pub label: String,
    /// `fastest_mean / mean`.
    pub relative: f64,
    /// Whether this entry has the fastest mean.
    pub is_fastest: bool,
}

/// Scanned results of a whole catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Catalogue the analysis was run against.
    pub catalogue: Catalogue,
    /// Directory the files were read from.
    pub results_dir: String,
    /// One result per catalogue section, in catalogue order.
    pub sections: Vec<SectionResult>,
}

impl Analysis {
    /// Number of result files that contributed samples.
    pub fn files_found(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}

/// Scans every file of `catalogue` under `dir`.
///
/// # Errors
///
/// Fails only when an existing file cannot be read.
pub fn analyze(catalogue: &Catalogue, dir: &Path) -> Result<Analysis> {
    let mut sections = Vec::with_capacity(catalogue.sections.len());

    for section in &catalogue.sections {
        let mut entries = Vec::new();
        for entry in &section.entries {
            if let Some(summary) = scan_file(&dir.join(&entry.file))? {
                debug!(
                    benchmark = %section.key,
                    language = %entry.language,
                    runs = summary.count,
                    "scanned result file"
                );
                entries.push(EntryResult {
                    language: entry.language.clone(),
                    label: entry.label.clone(),
                    summary,
                });
            }
        }
        sections.push(SectionResult {
            section: section.clone(),
            entries,
        });
    }

    let analysis = Analysis {
        catalogue: catalogue.clone(),
        results_dir: dir.display().to_string(),
        sections,
    };
    info!(files = analysis.files_found(), dir = %dir.display(), "log scan complete");
    Ok(analysis)
}

/// Local time formatted for report headers.
pub fn generation_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

const STATS_HEADER: &str = "| Mean (ns) | Median (ns) | Std Dev | CV (%) | Min (ns) | Max (ns) |";
const STATS_RULE: &str = "|-----------|-------------|---------|--------|----------|----------|";

/// Renders the narrative document.
///
/// Sections without any present file are left out of the statistics and
/// ranking tables.
pub fn render_narrative(analysis: &Analysis, timestamp: &str) -> String {
    let catalogue = &analysis.catalogue;
    let wording = &catalogue.wording;
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", catalogue.title));
    md.push_str(&format!("**Date:** {}  \n", timestamp));
    md.push_str(&format!(
        "**Methodology:** {} runs per benchmark, statistical analysis  \n",
        catalogue.runs
    ));
    for line in &wording.header_lines {
        md.push_str(&format!("{}  \n", line));
    }
    md.push('\n');

    if !wording.introduction.is_empty() {
        md.push_str(&wording.introduction);
        md.push('\n');
    }

    md.push_str(&format!("## {}\n\n", wording.summary_heading));
    let present: Vec<&SectionResult> = analysis
        .sections
        .iter()
        .filter(|s| !s.entries.is_empty())
        .collect();

    if present.is_empty() {
        md.push_str("_No benchmark result files were found._\n\n");
    }

    for result in &present {
        md.push_str(&format!("### {}\n\n", result.section.heading));
        let column = &result.section.column;
        md.push_str(&format!("| {} {}\n", column, STATS_HEADER));
        md.push_str(&format!("|{}{}\n", "-".repeat(column.len() + 2), STATS_RULE));
        for entry in &result.entries {
            let s = &entry.summary;
            md.push_str(&format!(
                "| **{}** | {} | {} | {} | {:.1} | {} | {} |\n",
                entry.label,
                format_thousands(s.mean),
                format_thousands(s.median),
                format_thousands(s.std_dev),
                s.cv,
                format_thousands(s.min),
                format_thousands(s.max),
            ));
        }
        md.push('\n');
    }

    if !present.is_empty() {
        md.push_str(&format!(
            "## Performance Analysis\n\n### {}\n\n",
            wording.rankings_heading
        ));
        for result in &present {
            md.push_str(&format!(
                "#### {} {}\n\n",
                title_case(&result.section.key),
                wording.ranking_suffix
            ));
            md.push_str("| Language | Relative Performance | vs Best |\n");
            md.push_str("|----------|----------------------|----------|\n");
            for ranking in result.rankings() {
                let vs_best = if ranking.is_fastest {
                    "**1.00x (Best)**".to_string()
                } else {
                    format!("{:.2}x", ranking.relative)
                };
                md.push_str(&format!(
                    "| **{}** | {:.2}x | {} |\n",
                    ranking.label, ranking.relative, vs_best
                ));
            }
            md.push('\n');
        }
    }

    let findings = key_findings(analysis);
    if !wording.findings_preamble.is_empty() || !findings.is_empty() {
        md.push_str("## Key Findings\n\n");
        md.push_str(&wording.findings_preamble);
        if !catalogue.head_to_head.is_empty() {
            md.push_str("### Performance Insights\n");
        }
        for finding in &findings {
            md.push_str(&format!("- {}\n", finding));
        }
        md.push('\n');
    }

    md.push_str(&catalogue.closing);
    md.push('\n');

    md.push_str(&format!("## Raw Data Files\n\n{}\n", wording.raw_data_intro));
    for section in &catalogue.sections {
        md.push_str(&format!(
            "- `{}/{}_*.txt`\n",
            analysis.results_dir.trim_end_matches('/'),
            section.file_prefix()
        ));
    }
    md.push_str(&format!("\n{}\n", wording.raw_data_note));

    if !wording.epilogue.is_empty() {
        md.push('\n');
        md.push_str(&wording.epilogue);
    }

    md
}

/// Head-to-head statements that hold for this analysis.
pub fn key_findings(analysis: &Analysis) -> Vec<String> {
    analysis
        .catalogue
        .head_to_head
        .iter()
        .filter_map(|h2h| {
            let section = analysis.sections.iter().find(|s| s.section.key == h2h.section)?;
            let subject = section.entry(&h2h.subject)?.summary.mean;
            let baseline = section.entry(&h2h.baseline)?.summary.mean;
            if subject < baseline && baseline > 0.0 {
                let improvement = (baseline - subject) / baseline * 100.0;
                Some(format!("**{}** by {:.1}%", h2h.claim, improvement))
            } else {
                None
            }
        })
        .collect()
}
