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

//! `hls-report` command-line library.
//!
//! Runs the extraction over one HLS project directory, prints the report to
//! stdout and maps the outcome to a process exit status:
//!
//! | Code | Meaning                                               |
//! |------|-------------------------------------------------------|
//! | 0    | At least one solution produced report data            |
//! | 1    | Usage error, or the run could not complete            |
//! | 2    | No solution produced any report data                  |
//!
//! Diagnostics go to stderr through `tracing`; set `RUST_LOG` to adjust them
//! (for example `RUST_LOG=hls_report=debug`).

pub mod error;

use error::CliError;
use hls_report::{render_project, Extractor, ProjectReport};
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Outcome of a run, as a process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// At least one solution had data.
    Success,
    /// Bad arguments, or the project could not be scanned or printed.
    Failure,
    /// The project was scanned but no solution had data.
    NoData,
}

impl ExitStatus {
    /// Numeric exit code.
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::NoData => 2,
        }
    }

    /// Status for a scanned project.
    pub fn for_project(project: &ProjectReport) -> Self {
        if project.any_succeeded() {
            ExitStatus::Success
        } else {
            ExitStatus::NoData
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Install the stderr log subscriber.
///
/// Uses `RUST_LOG` when set, otherwise `info` for this tool's crates.
/// Calling this twice is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("hls_report=info,hls_report_cli=info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Extract and print the report for `project` to `out`.
///
/// # Errors
///
/// Returns [`CliError::Report`] if the project directory cannot be scanned and
/// [`CliError::Output`] if writing fails.
pub fn report_project(project: &Path, out: &mut impl Write) -> Result<ExitStatus, CliError> {
    let report = Extractor::default().process_project(project)?;

    out.write_all(render_project(&report).as_bytes())
        .and_then(|()| out.flush())
        .map_err(CliError::output)?;

    if report.total_solutions() == 0 {
        warn!("No solution directories in '{}'", project.display());
    } else if report.failure_count() > 0 {
        warn!(
            "{} of {} solutions produced no report data",
            report.failure_count(),
            report.total_solutions()
        );
    }
    Ok(ExitStatus::for_project(&report))
}

/// Run the tool on `project`, printing to stdout.
pub fn run(project: &Path) -> ExitStatus {
    let stdout = io::stdout();
    match report_project(project, &mut stdout.lock()) {
        Ok(status) => status,
        Err(e) => {
            error!("{}", e);
            ExitStatus::Failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hls_report_test::{ProjectBuilder, SynthesisXml};

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_eq!(ExitStatus::Failure.code(), 1);
        assert_eq!(ExitStatus::NoData.code(), 2);
    }

    #[test]
    fn test_report_project_writes_block() {
        let project = ProjectBuilder::new()
            .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
            .build();

        let mut out = Vec::new();
        let status = report_project(project.path(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(status, ExitStatus::Success);
        assert!(text.contains("** Syn. Report **"));
        assert!(text.contains("Target-CP   : -not found-"));
    }

    #[test]
    fn test_report_project_without_data() {
        let project = ProjectBuilder::new().empty_solution("solution1").build();
        let mut out = Vec::new();
        let status = report_project(project.path(), &mut out).unwrap();
        assert_eq!(status, ExitStatus::NoData);
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_report_project_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = report_project(&dir.path().join("missing"), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Report(_)));
        assert!(out.is_empty());
    }
}
