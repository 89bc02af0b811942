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

//! Extraction settings.
//!
//! The report sub-paths and file patterns are fixed by the Vivado HLS output
//! layout; they live here so tests and alternative toolchain versions can
//! adjust them without touching the locator or the parsers.

/// Default maximum report size to prevent runaway reads (1 GB).
/// Can be overridden via the `HLS_REPORT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable holding the maximum report size in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "HLS_REPORT_MAX_FILE_SIZE";

/// A rule forcing a literal report file name for solutions with a given name.
///
/// The `rs` solutions emit several synthesis XML files, none of which is
/// reliably the shortest, so the top-level report is named explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForcedReport {
    /// Final path segment of the solution directory that triggers the rule
    pub segment: String,
    /// File name selected inside the report directory
    pub file_name: String,
}

impl ForcedReport {
    /// Create a new forced-report rule.
    pub fn new(segment: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            segment: segment.into(),
            file_name: file_name.into(),
        }
    }
}

/// Configuration for locating and reading solution reports.
///
/// # Examples
///
/// ```rust
/// use hls_report::ExtractConfig;
///
/// let config = ExtractConfig::default();
/// assert_eq!(config.synthesis_dir, "syn/report");
/// assert_eq!(config.cosim_pattern, "*cosim.rpt");
///
/// // Ignore the `rs` special case
/// let config = ExtractConfig {
///     synthesis_override: None,
///     ..ExtractConfig::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Synthesis report directory, relative to the solution.
    pub synthesis_dir: String,
    /// Synthesis report file pattern.
    pub synthesis_pattern: String,
    /// Implementation report directory, relative to the solution.
    pub implementation_dir: String,
    /// Implementation report file pattern.
    pub implementation_pattern: String,
    /// Co-simulation report directory, relative to the solution.
    pub cosim_dir: String,
    /// Co-simulation report file pattern.
    pub cosim_pattern: String,
    /// Literal synthesis file name for specially named solutions.
    pub synthesis_override: Option<ForcedReport>,
    /// Maximum size of a report file in bytes.
    pub max_file_size: u64,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            synthesis_dir: "syn/report".to_string(),
            synthesis_pattern: "*.xml".to_string(),
            implementation_dir: "impl/report/verilog".to_string(),
            implementation_pattern: "*.xml".to_string(),
            cosim_dir: "sim/report".to_string(),
            cosim_pattern: "*cosim.rpt".to_string(),
            synthesis_override: Some(ForcedReport::new("rs", "rs_decode_csynth.xml")),
            max_file_size: max_file_size_from_env(),
        }
    }
}

/// Get the maximum file size from the environment or use the default.
///
/// Falls back to [`DEFAULT_MAX_FILE_SIZE`] when the variable is unset or not a
/// valid byte count.
pub fn max_file_size_from_env() -> u64 {
    parse_max_file_size(std::env::var(MAX_FILE_SIZE_ENV).ok().as_deref())
}

/// Interpret a size limit setting, falling back to [`DEFAULT_MAX_FILE_SIZE`].
pub fn parse_max_file_size(value: Option<&str>) -> u64 {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}
