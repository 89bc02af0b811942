// Dweve HLS Report - Vivado HLS build metrics extraction
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

//! Report records produced for each solution.

use crate::error::ReportError;
use std::fmt;
use std::path::{Path, PathBuf};

/// The three report groups a solution can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// HLS synthesis estimate (`syn/report`)
    Synthesis,
    /// Post place-and-route implementation report (`impl/report/verilog`)
    Implementation,
    /// RTL co-simulation log (`sim/report`)
    Cosim,
}

impl ReportKind {
    /// All kinds, in processing order.
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Synthesis,
        ReportKind::Implementation,
        ReportKind::Cosim,
    ];

    /// Short lowercase name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ReportKind::Synthesis => "synthesis",
            ReportKind::Implementation => "implementation",
            ReportKind::Cosim => "cosim",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Estimated performance and area from the HLS synthesis report.
///
/// The latency and pipelining fields are `None` when the toolchain did not
/// report them (non-pipelined designs omit II and depth).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisEstimate {
    /// Top-level function name
    pub name: String,
    /// Toolchain report version
    pub version: String,
    /// Target part
    pub device: String,
    /// Average-case latency in cycles
    pub avg_latency: Option<String>,
    /// Worst-case latency in cycles
    pub worst_latency: Option<String>,
    /// Achieved pipeline initiation interval
    pub initiation_interval: Option<String>,
    /// Pipeline depth
    pub pipeline_depth: Option<String>,
    /// Estimated clock period
    pub estimated_clock_period: String,
    /// Estimated LUT usage
    pub estimated_lut: String,
    /// Estimated flip-flop usage
    pub estimated_ff: String,
    /// Estimated 18K block RAM usage
    pub estimated_bram: String,
}

/// Resource usage and timing measured after implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImplementationMetrics {
    /// Occupied slices
    pub slice: String,
    /// Look-up tables
    pub lut: String,
    /// Flip-flops
    pub ff: String,
    /// Shift-register LUTs
    pub srl: String,
    /// Block RAM tiles
    pub bram: String,
    /// DSP slices
    pub dsp: String,
    /// Requested clock period
    pub target_clock_period: String,
    /// Clock period met after place and route
    pub achieved_clock_period: String,
}

/// Latency summary of a passing Verilog co-simulation, in clock cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosimResult {
    /// Minimum latency
    pub min_latency: u64,
    /// Average latency
    pub avg_latency: u64,
    /// Maximum latency
    pub max_latency: u64,
}

/// Everything extracted for one solution directory.
///
/// A report is successful iff at least one of the three records is present.
/// Failures of individual kinds are kept for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct SolutionReport {
    /// The solution directory
    pub path: PathBuf,
    /// Parsed synthesis estimate, if any
    pub synthesis: Option<SynthesisEstimate>,
    /// Parsed implementation metrics, if any
    pub implementation: Option<ImplementationMetrics>,
    /// Parsed co-simulation latencies, if any
    pub cosim: Option<CosimResult>,
    /// Why the missing records are missing
    pub failures: Vec<(ReportKind, ReportError)>,
}

impl SolutionReport {
    /// Create an empty (failed) report for a solution.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            synthesis: None,
            implementation: None,
            cosim: None,
            failures: Vec::new(),
        }
    }

    /// Check if any report kind produced data.
    pub fn is_successful(&self) -> bool {
        self.synthesis.is_some() || self.implementation.is_some() || self.cosim.is_some()
    }

    /// The recorded failure for a kind, if it failed.
    pub fn failure(&self, kind: ReportKind) -> Option<&ReportError> {
        self.failures
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| e)
    }
}

/// Reports for every solution of a project, in processing order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    /// The project directory
    pub path: PathBuf,
    /// One report per solution subdirectory
    pub solutions: Vec<SolutionReport>,
}

impl ProjectReport {
    /// Create a project report from its solution reports.
    pub fn new(path: impl Into<PathBuf>, solutions: Vec<SolutionReport>) -> Self {
        Self {
            path: path.into(),
            solutions,
        }
    }

    /// The project directory.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the number of solutions visited.
    pub fn total_solutions(&self) -> usize {
        self.solutions.len()
    }

    /// Get the number of solutions with at least partial data.
    pub fn success_count(&self) -> usize {
        self.solutions.iter().filter(|s| s.is_successful()).count()
    }

    /// Get the number of solutions with no data at all.
    pub fn failure_count(&self) -> usize {
        self.total_solutions() - self.success_count()
    }

    /// Check if every solution produced data.
    pub fn all_succeeded(&self) -> bool {
        self.solutions.iter().all(SolutionReport::is_successful)
    }

    /// Check if any solution produced data.
    pub fn any_succeeded(&self) -> bool {
        self.solutions.iter().any(SolutionReport::is_successful)
    }

    /// Get an iterator over solutions with data.
    pub fn successes(&self) -> impl Iterator<Item = &SolutionReport> {
        self.solutions.iter().filter(|s| s.is_successful())
    }

    /// Get an iterator over solutions without data.
    pub fn failures(&self) -> impl Iterator<Item = &SolutionReport> {
        self.solutions.iter().filter(|s| !s.is_successful())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cosim() -> CosimResult {
        CosimResult {
            min_latency: 1,
            avg_latency: 2,
            max_latency: 3,
        }
    }

    #[test]
    fn test_empty_report_is_failed() {
        let report = SolutionReport::new("prj/solution1");
        assert!(!report.is_successful());
    }

    #[test]
    fn test_any_record_makes_report_successful() {
        let mut report = SolutionReport::new("prj/solution1");
        report.cosim = Some(cosim());
        assert!(report.is_successful());
    }

    #[test]
    fn test_failure_lookup() {
        let mut report = SolutionReport::new("prj/solution1");
        report.failures.push((
            ReportKind::Implementation,
            ReportError::MissingDirectory {
                path: "prj/solution1/impl/report/verilog".into(),
            },
        ));
        assert!(report.failure(ReportKind::Implementation).is_some());
        assert!(report.failure(ReportKind::Synthesis).is_none());
    }

    #[test]
    fn test_project_counts() {
        let mut ok = SolutionReport::new("prj/a");
        ok.cosim = Some(cosim());
        let failed = SolutionReport::new("prj/b");
        let project = ProjectReport::new("prj", vec![ok, failed]);

        assert_eq!(project.total_solutions(), 2);
        assert_eq!(project.success_count(), 1);
        assert_eq!(project.failure_count(), 1);
        assert!(project.any_succeeded());
        assert!(!project.all_succeeded());
        assert_eq!(project.failures().next().unwrap().path, PathBuf::from("prj/b"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ReportKind::Cosim.to_string(), "cosim");
        assert_eq!(ReportKind::ALL.len(), 3);
    }
}
