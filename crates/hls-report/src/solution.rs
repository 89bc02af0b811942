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

//! Per-solution extraction.
//!
//! [`Extractor`] ties the locator, the reader and the three parsers together.
//! Report kinds are independent: a missing or broken report only removes its
//! own record from the [`SolutionReport`].

use crate::config::ExtractConfig;
use crate::cosim::parse_cosim;
use crate::error::ReportError;
use crate::implementation::parse_implementation;
use crate::io::read_report;
use crate::locator::{ReportLocator, SelectionPolicy, ShortestName};
use crate::model::{ReportKind, SolutionReport};
use crate::synthesis::parse_synthesis;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Extracts report data from solution and project directories.
///
/// # Examples
///
/// ```rust,no_run
/// use hls_report::Extractor;
/// use std::path::Path;
///
/// # fn main() -> Result<(), hls_report::ReportError> {
/// let extractor = Extractor::default();
/// let project = extractor.process_project(Path::new("hls_prj"))?;
/// println!(
///     "{} of {} solutions produced data",
///     project.success_count(),
///     project.total_solutions()
/// );
/// # Ok(())
/// # }
/// ```
pub struct Extractor {
    config: ExtractConfig,
    locator: ReportLocator,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(ExtractConfig::default())
    }
}

impl Extractor {
    /// Create an extractor with the default [`ShortestName`] policy.
    pub fn new(config: ExtractConfig) -> Self {
        Self::with_policy(config, Box::new(ShortestName))
    }

    /// Create an extractor with a custom selection policy.
    pub fn with_policy(config: ExtractConfig, policy: Box<dyn SelectionPolicy>) -> Self {
        let locator = ReportLocator::new(policy).with_forced(config.synthesis_override.clone());
        Self { config, locator }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract all three report kinds for one solution directory.
    ///
    /// Never fails as a whole; check [`SolutionReport::is_successful`].
    pub fn process_solution(&self, solution: &Path) -> SolutionReport {
        let mut report = SolutionReport::new(solution);

        for kind in ReportKind::ALL {
            let outcome = match kind {
                ReportKind::Synthesis => self
                    .load(solution, kind)
                    .and_then(|(text, path)| parse_synthesis(&text, &path))
                    .map(|estimate| report.synthesis = Some(estimate)),
                ReportKind::Implementation => self
                    .load(solution, kind)
                    .and_then(|(text, path)| parse_implementation(&text, &path))
                    .map(|metrics| report.implementation = Some(metrics)),
                ReportKind::Cosim => self
                    .load(solution, kind)
                    .and_then(|(text, path)| parse_cosim(&text, &path))
                    .map(|result| report.cosim = Some(result)),
            };

            if let Err(e) = outcome {
                if e.is_data_gap() {
                    warn!("**** {} ({} report)", e, kind);
                } else {
                    error!("**** {} ({} report)", e, kind);
                }
                report.failures.push((kind, e));
            }
        }

        if !report.is_successful() {
            warn!("No report data found for solution '{}'", solution.display());
        }
        report
    }

    fn report_location(&self, kind: ReportKind) -> (&String, &String) {
        let config = &self.config;
        match kind {
            ReportKind::Synthesis => (&config.synthesis_dir, &config.synthesis_pattern),
            ReportKind::Implementation => {
                (&config.implementation_dir, &config.implementation_pattern)
            }
            ReportKind::Cosim => (&config.cosim_dir, &config.cosim_pattern),
        }
    }

    /// Locate and read the report of `kind`, returning its text and path.
    fn load(&self, solution: &Path, kind: ReportKind) -> Result<(String, PathBuf), ReportError> {
        let (dir, pattern) = self.report_location(kind);
        let hint = (kind == ReportKind::Synthesis).then_some(solution);

        let located = self.locator.locate(&solution.join(dir), pattern, hint)?;
        info!("Parsing {}", located.path.display());

        let text = read_report(&located.path, self.config.max_file_size)?;
        Ok((text, located.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hls_report_test::{CosimLog, ImplementationXml, ProjectBuilder, SynthesisXml};

    #[test]
    fn test_full_solution() {
        let project = ProjectBuilder::new()
            .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
            .implementation("solution1", "top_export.xml", ImplementationXml::new().render())
            .cosim("solution1", "top_cosim.rpt", CosimLog::passing(10, 11, 12).render())
            .build();

        let report = Extractor::default().process_solution(&project.solution_path("solution1"));
        assert!(report.is_successful());
        assert!(report.failures.is_empty());
        assert_eq!(report.synthesis.unwrap().name, "top");
        assert_eq!(report.implementation.unwrap().dsp, "18");
        assert_eq!(report.cosim.unwrap().max_latency, 12);
    }

    #[test]
    fn test_synthesis_only_solution() {
        let project = ProjectBuilder::new()
            .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
            .build();

        let report = Extractor::default().process_solution(&project.solution_path("solution1"));
        assert!(report.is_successful());
        assert!(report.implementation.is_none());
        assert!(report.cosim.is_none());
        assert!(matches!(
            report.failure(ReportKind::Implementation),
            Some(ReportError::MissingDirectory { .. })
        ));
        assert!(matches!(
            report.failure(ReportKind::Cosim),
            Some(ReportError::MissingDirectory { .. })
        ));
    }

    #[test]
    fn test_malformed_synthesis_keeps_other_kinds() {
        let project = ProjectBuilder::new()
            .synthesis(
                "solution1",
                "top_csynth.xml",
                SynthesisXml::pipelined().without("EstimatedClockPeriod").render(),
            )
            .implementation("solution1", "top_export.xml", ImplementationXml::new().render())
            .build();

        let report = Extractor::default().process_solution(&project.solution_path("solution1"));
        assert!(report.synthesis.is_none());
        assert!(report.implementation.is_some());
        assert!(matches!(
            report.failure(ReportKind::Synthesis),
            Some(ReportError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn test_empty_solution_fails() {
        let project = ProjectBuilder::new().empty_solution("solution1").build();
        let report = Extractor::default().process_solution(&project.solution_path("solution1"));
        assert!(!report.is_successful());
        assert_eq!(report.failures.len(), 3);
    }

    #[test]
    fn test_rs_solution_forces_file_name() {
        let project = ProjectBuilder::new()
            .synthesis("rs", "a.xml", SynthesisXml::pipelined().set("TopModelName", "other").render())
            .synthesis("rs", "rs_decode_csynth.xml", SynthesisXml::pipelined().set("TopModelName", "rs_decode").render())
            .build();

        let report = Extractor::default().process_solution(&project.solution_path("rs"));
        assert_eq!(report.synthesis.unwrap().name, "rs_decode");
    }

    #[test]
    fn test_rs_solution_without_forced_file() {
        let project = ProjectBuilder::new()
            .synthesis("rs", "a.xml", SynthesisXml::pipelined().render())
            .build();

        let report = Extractor::default().process_solution(&project.solution_path("rs"));
        assert!(report.synthesis.is_none());
        assert!(matches!(
            report.failure(ReportKind::Synthesis),
            Some(ReportError::NoCandidateFile { pattern, .. }) if pattern == "rs_decode_csynth.xml"
        ));
    }

    #[test]
    fn test_oversized_report_is_scoped_to_kind() {
        let synthesis = SynthesisXml::pipelined().render();
        let cosim = CosimLog::passing(1, 2, 3).render();
        assert!(synthesis.len() > cosim.len());

        let project = ProjectBuilder::new()
            .synthesis("solution1", "top_csynth.xml", synthesis)
            .cosim("solution1", "top_cosim.rpt", cosim.as_str())
            .build();

        let config = ExtractConfig {
            max_file_size: cosim.len() as u64,
            ..ExtractConfig::default()
        };
        let report = Extractor::new(config).process_solution(&project.solution_path("solution1"));
        assert!(matches!(
            report.failure(ReportKind::Synthesis),
            Some(ReportError::FileTooLarge { .. })
        ));
        assert!(report.cosim.is_some());
    }
}
