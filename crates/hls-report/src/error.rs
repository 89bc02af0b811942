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

//! Structured error types for report extraction.
//!
//! Every failure that can happen while locating or parsing one report kind is a
//! [`ReportError`]. The solution processor records these per kind instead of
//! aborting, so only [`ReportError::ProjectNotFound`] ever stops a run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The error type for report location and parsing.
///
/// # Cloning
///
/// Implements `Clone` so failures can be stored on a
/// [`SolutionReport`](crate::SolutionReport) and still be rendered later.
///
/// # Examples
///
/// ```rust
/// use hls_report::ReportError;
///
/// let err = ReportError::malformed("solution1/syn/report/top_csynth.xml", "UserAssignments/Part");
/// assert!(err.to_string().contains("UserAssignments/Part"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// The expected report directory does not exist.
    #[error("Cannot find report directory '{path}'")]
    MissingDirectory {
        /// The directory that was looked up
        path: PathBuf,
    },

    /// No file in the report directory matched the pattern.
    #[error("No file matching '{pattern}' in '{directory}'")]
    NoCandidateFile {
        /// The directory that was searched
        directory: PathBuf,
        /// The glob pattern or literal file name that was expected
        pattern: String,
    },

    /// A required element is missing from an otherwise readable document.
    #[error("Malformed report '{path}': missing required element '{node}'")]
    MalformedDocument {
        /// The report file
        path: PathBuf,
        /// Slash-separated element path below the document root
        node: String,
    },

    /// The report is not well-formed XML.
    #[error("Invalid XML in '{path}': {message}")]
    InvalidXml {
        /// The report file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// The co-simulation log has no passing Verilog row.
    #[error("Cannot find Verilog sim results in '{path}'")]
    NoDataFound {
        /// The co-simulation log
        path: PathBuf,
    },

    /// The selected co-simulation row holds a latency that is not a cycle count.
    #[error("Invalid latency '{value}' in '{path}'")]
    InvalidLatency {
        /// The co-simulation log
        path: PathBuf,
        /// The offending cell text
        value: String,
    },

    /// I/O operation failed (directory listing, metadata or read).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Report file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The oversized file
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
    },

    /// The project directory itself does not exist.
    #[error("Cannot find project '{path}'")]
    ProjectNotFound {
        /// The project directory
        path: PathBuf,
    },

    /// A configured glob pattern could not be compiled.
    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Compiler message
        message: String,
    },
}

impl ReportError {
    /// Create an I/O error with path context.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use hls_report::ReportError;
    /// use std::fs;
    ///
    /// let result = fs::read_to_string("top_csynth.xml")
    ///     .map_err(|e| ReportError::io_error("top_csynth.xml", e));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a missing-element error.
    pub fn malformed(path: impl Into<PathBuf>, node: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.into(),
            node: node.into(),
        }
    }

    /// Create a no-candidate error.
    pub fn no_candidate(directory: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self::NoCandidateFile {
            directory: directory.into(),
            pattern: pattern.into(),
        }
    }

    /// Whether the report was simply absent, as opposed to present but unusable.
    ///
    /// Absent reports are normal for solutions that never ran a stage.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            Self::MissingDirectory { .. } | Self::NoCandidateFile { .. }
        )
    }

    /// Whether the failure is an expected gap in the data rather than a broken
    /// report: an absent report, or a co-simulation log without a passing run.
    pub fn is_data_gap(&self) -> bool {
        self.is_absent() || matches!(self, Self::NoDataFound { .. })
    }
}
