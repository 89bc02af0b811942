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

//! RTL co-simulation report (`<top>_cosim.rpt`).
//!
//! The report is a fixed-width ASCII table with one row per RTL language:
//!
//! ```text
//! |      VHDL|        NA|      NA|      NA|      NA|
//! |   Verilog|      Pass|    1207|    1207|    1207|
//! ```
//!
//! Only passing Verilog rows carry usable latencies.

use crate::error::ReportError;
use crate::model::CosimResult;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn passing_row() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\|\s*Verilog\s*\|\s*Pass\s*\|").expect("valid row regex"))
}

fn latency_cells() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\|\s*(\d+)\s*\|\s*(\d+)\s*\|\s*(\d+)\s*\|").expect("valid latency regex")
    })
}

/// The three latency cells of a passing Verilog row.
fn latency_row(line: &str) -> Option<[&str; 3]> {
    if !passing_row().is_match(line) {
        return None;
    }
    let caps = latency_cells().captures(line)?;
    Some([1, 2, 3].map(|i| caps.get(i).map_or("", |m| m.as_str())))
}

fn cycles(cell: &str, source: &Path) -> Result<u64, ReportError> {
    cell.parse().map_err(|_| ReportError::InvalidLatency {
        path: source.to_path_buf(),
        value: cell.to_string(),
    })
}

// TODO: confirm whether the first passing row should win instead; reports
// with several Verilog runs currently keep the last one.
/// Extract min/avg/max latency from a co-simulation report.
///
/// Every line is scanned and the last passing Verilog row wins.
///
/// # Errors
///
/// Returns [`ReportError::NoDataFound`] if no passing Verilog row with three
/// latency values exists, and [`ReportError::InvalidLatency`] if the selected
/// row holds a value that does not fit a cycle count.
///
/// # Examples
///
/// ```rust
/// use hls_report::parse_cosim;
/// use std::path::Path;
///
/// let log = "|   Verilog|      Pass|    1207|    1208|    1209|\n";
/// let result = parse_cosim(log, Path::new("top_cosim.rpt")).unwrap();
/// assert_eq!((result.min_latency, result.avg_latency, result.max_latency), (1207, 1208, 1209));
/// ```
pub fn parse_cosim(text: &str, source: &Path) -> Result<CosimResult, ReportError> {
    let [min, avg, max] = text
        .lines()
        .filter_map(latency_row)
        .last()
        .ok_or_else(|| ReportError::NoDataFound {
            path: source.to_path_buf(),
        })?;

    Ok(CosimResult {
        min_latency: cycles(min, source)?,
        avg_latency: cycles(avg, source)?,
        max_latency: cycles(max, source)?,
    })
}
