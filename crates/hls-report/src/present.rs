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

//! Text rendering of extracted reports.
//!
//! Key order, the `%-12s: %-30s` columns and the `-not found-` placeholder are
//! part of the output format.

use crate::model::{ProjectReport, SolutionReport};
use std::fmt::Write;

/// Placeholder for values a report did not provide.
pub const PLACEHOLDER: &str = "-not found-";

fn push_field(out: &mut String, key: &str, value: Option<&str>) {
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{:<12}: {:<30}", key, value.unwrap_or(PLACEHOLDER));
}

/// Render one solution block.
///
/// Absent records render every one of their fields as [`PLACEHOLDER`].
///
/// # Examples
///
/// ```rust
/// use hls_report::{render_solution, SolutionReport};
///
/// let text = render_solution(&SolutionReport::new("prj/solution1"));
/// assert!(text.contains("Solution: prj/solution1"));
/// assert!(text.contains("Name        : -not found-"));
/// ```
pub fn render_solution(report: &SolutionReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "Solution: {}", report.path.display());

    let syn = report.synthesis.as_ref();
    out.push_str("** Syn. Report **\n");
    push_field(&mut out, "Name", syn.map(|s| s.name.as_str()));
    push_field(&mut out, "Version", syn.map(|s| s.version.as_str()));
    push_field(&mut out, "Device", syn.map(|s| s.device.as_str()));
    push_field(&mut out, "Avg-Lat", syn.and_then(|s| s.avg_latency.as_deref()));
    push_field(&mut out, "Worst-Lat", syn.and_then(|s| s.worst_latency.as_deref()));
    push_field(&mut out, "Actual-II", syn.and_then(|s| s.initiation_interval.as_deref()));
    push_field(&mut out, "Depth", syn.and_then(|s| s.pipeline_depth.as_deref()));
    push_field(&mut out, "Est-CLK", syn.map(|s| s.estimated_clock_period.as_str()));
    push_field(&mut out, "Est-LUT", syn.map(|s| s.estimated_lut.as_str()));
    push_field(&mut out, "Est-FF", syn.map(|s| s.estimated_ff.as_str()));
    push_field(&mut out, "Est-BRAM", syn.map(|s| s.estimated_bram.as_str()));
    out.push('\n');

    let imp = report.implementation.as_ref();
    out.push_str("** Impl. Report **\n");
    push_field(&mut out, "Target-CP", imp.map(|i| i.target_clock_period.as_str()));
    push_field(&mut out, "Actual-CP", imp.map(|i| i.achieved_clock_period.as_str()));
    push_field(&mut out, "Slice", imp.map(|i| i.slice.as_str()));
    push_field(&mut out, "LUT", imp.map(|i| i.lut.as_str()));
    push_field(&mut out, "FF", imp.map(|i| i.ff.as_str()));
    push_field(&mut out, "SRL", imp.map(|i| i.srl.as_str()));
    push_field(&mut out, "BRAM", imp.map(|i| i.bram.as_str()));
    push_field(&mut out, "DSP", imp.map(|i| i.dsp.as_str()));
    out.push('\n');

    let sim = report.cosim.map(|c| {
        [
            c.min_latency.to_string(),
            c.avg_latency.to_string(),
            c.max_latency.to_string(),
        ]
    });
    out.push_str("** Sim. Report **\n");
    for (index, key) in ["Min", "Avg", "Max"].into_iter().enumerate() {
        push_field(&mut out, key, sim.as_ref().map(|values| values[index].as_str()));
    }

    out
}

/// Render every successful solution of a project, followed by a blank line.
///
/// Solutions without any data are left out; they are reported as diagnostics
/// while processing.
pub fn render_project(project: &ProjectReport) -> String {
    let mut out: String = project.successes().map(render_solution).collect();
    out.push('\n');
    out
}
