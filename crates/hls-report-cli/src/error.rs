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

//! Structured error types for the `hls-report` binary.

use hls_report::ReportError;
use std::io;
use thiserror::Error;

/// The error type for a CLI run.
///
/// Only errors that stop the whole run end up here; per-report failures stay
/// on the [`SolutionReport`](hls_report::SolutionReport).
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// The project could not be scanned.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Writing the report to standard output failed.
    #[error("Failed to write to stdout: {message}")]
    Output {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an output error from an I/O error.
    pub fn output(source: io::Error) -> Self {
        Self::Output {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_error_is_transparent() {
        let err: CliError = ReportError::ProjectNotFound {
            path: "missing_prj".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Cannot find project 'missing_prj'");
    }

    #[test]
    fn test_output_error_display() {
        let err = CliError::output(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"));
        assert_eq!(err.to_string(), "Failed to write to stdout: broken pipe");
    }
}
