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

//! Log-scan report tests against a populated results directory.

use std::fs;
use tally_report::{analyze, render_narrative, Catalogue, Preset};
use tempfile::TempDir;

fn populate(dir: &TempDir, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.path().join(name), content).expect("Failed to write result file");
    }
}

#[test]
fn test_comprehensive_report_end_to_end() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    populate(
        &dir,
        &[
            ("fibonacci_c.txt", "run1 TIME_NS=100\nnoise\nrun2 TIME_NS=300\n"),
            ("fibonacci_tenge.txt", "TIME_NS=150\nTIME_NS=250\n"),
            ("nbody_go.txt", "TIME_NS=5000\n"),
        ],
    );

    let analysis = analyze(&Catalogue::preset(Preset::Comprehensive), dir.path())
        .expect("analysis succeeds");
    let md = render_narrative(&analysis, "2025-09-30 08:00:00");

    assert!(md.starts_with("# Comprehensive Benchmark Results (5 Runs Average)\n"));
    assert!(md.contains("| **C** | 200 | 200 | 141 | 70.7 | 100 | 300 |"));
    assert!(md.contains("| **TENGE** | 200 | 200 | 71 | 35.4 | 150 | 250 |"));
    assert!(!md.contains("QuickSort"));

    // Equal means: both entries are labeled fastest.
    assert!(md.contains("## Statistical Summary\n"));
    assert!(md.contains("### Relative Performance (vs Best)\n"));
    assert!(!md.contains("Benchmark Rankings"));
    let fib = md.find("#### Fibonacci Benchmark\n").expect("fibonacci rankings");
    let nbody = md.find("#### Nbody Benchmark\n").expect("nbody rankings");
    assert!(fib < nbody);
    assert_eq!(md.matches("**1.00x (Best)**").count(), 3);
}

#[test]
fn test_report_is_deterministic_for_fixed_timestamp() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    populate(&dir, &[("sort_rust.txt", "TIME_NS=10\nTIME_NS=12\nTIME_NS=11\n")]);

    let catalogue = Catalogue::preset(Preset::Final);
    let first = render_narrative(&analyze(&catalogue, dir.path()).unwrap(), "t");
    let second = render_narrative(&analyze(&catalogue, dir.path()).unwrap(), "t");
    assert_eq!(first, second);
}

#[test]
fn test_comprehensive_fixed_text() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    populate(&dir, &[("nbody_c.txt", "TIME_NS=200\n"), ("nbody_tenge.txt", "TIME_NS=150\n")]);

    let analysis = analyze(&Catalogue::preset(Preset::Comprehensive), dir.path())
        .expect("analysis succeeds");
    let md = render_narrative(&analysis, "t");

    let reliability = md.find("### Statistical Reliability\n").expect("reliability block");
    let insights = md.find("### Performance Insights\n").expect("insights heading");
    let impact = md.find("### Optimization Impact\n").expect("impact block");
    assert!(reliability < insights && insights < impact);
    assert!(md.contains("### Performance Insights\n- **Tenge outperforms C in N-Body** by 25.0%\n"));
    assert!(md.contains("All raw benchmark outputs are available in:\n"));
    assert!(md.trim_end().ends_with("Each file contains 5 benchmark runs for statistical analysis."));
}

#[test]
fn test_final_fixed_text() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    populate(&dir, &[("matrix_tenge_optimized.txt", "TIME_NS=5\n")]);

    let analysis = analyze(&Catalogue::preset(Preset::Final), dir.path()).expect("analysis succeeds");
    let md = render_narrative(&analysis, "t");

    assert!(md.starts_with(
        "# Final Tenge Benchmark Report with Archetype Optimizations (September 2025)\n"
    ));
    assert!(md.contains("**Optimization Level:** Advanced Archetype Recognition  \n"));
    let summary = md.find("## Executive Summary\n").expect("executive summary");
    let results = md.find("## Comprehensive Results Analysis\n").expect("results heading");
    assert!(summary < results);
    assert!(md.contains("### Relative Performance Rankings\n"));
    assert!(md.contains("#### Matrix Benchmark Rankings\n"));
    assert!(md.contains("## Key Achievements\n"));
    assert!(!md.contains("## Key Findings"));
    let raw = md.find("## Raw Data Files\n\nComplete statistical data available in:\n").expect("raw data");
    let conclusion = md.find("## Conclusion\n").expect("conclusion");
    assert!(raw < conclusion);
}
