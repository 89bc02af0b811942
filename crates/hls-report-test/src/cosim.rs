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

//! Co-simulation report (`<top>_cosim.rpt`) builder.

const RULE: &str =
    "+----------+----------+-----------------------------------------------+-----------------------------------------------+----------------------+";

/// Builds a co-simulation report table.
///
/// # Examples
///
/// ```rust
/// use hls_report_test::CosimLog;
///
/// let log = CosimLog::passing(10, 12, 14).render();
/// assert!(log.contains("|   Verilog|      Pass|             10|"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CosimLog {
    rows: Vec<String>,
}

impl CosimLog {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The usual report: VHDL not run, Verilog passing.
    pub fn passing(min: u64, avg: u64, max: u64) -> Self {
        Self::new()
            .row("VHDL", "NA", None)
            .row("Verilog", "Pass", Some([min, avg, max]))
    }

    /// Append a result row. `None` latencies render as `NA`.
    pub fn row(mut self, language: &str, status: &str, latency: Option<[u64; 3]>) -> Self {
        let cells: Vec<String> = match latency {
            Some(values) => values.iter().map(u64::to_string).collect(),
            None => vec!["NA".to_string(); 3],
        };
        let mut row = format!("|{:>10}|{:>10}|", language, status);
        for cell in cells.iter().map(String::as_str).chain(["NA", "NA", "NA"]) {
            row.push_str(&format!("{:>15}|", cell));
        }
        row.push_str(&format!("{:>22}|", "NA"));
        self.rows.push(row);
        self
    }

    /// Append a raw line.
    pub fn line(mut self, text: &str) -> Self {
        self.rows.push(text.to_string());
        self
    }

    /// The report as text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&"=".repeat(60));
        out.push_str("\n  Generated by Cosim\n");
        out.push_str(&"=".repeat(60));
        out.push_str("\n\n");
        out.push_str(RULE);
        out.push_str("\n|          |          |             Latency(Clock Cycles)             |              Interval(Clock Cycles)           | Total Execution Time |\n");
        out.push_str("+   RTL    +  Status  +-----------------------------------------------+-----------------------------------------------+    (Clock Cycles)    +\n");
        out.push_str("|          |          |      min      |      avg      |      max      |      min      |      avg      |      max      |                      |\n");
        out.push_str(RULE);
        out.push('\n');
        for row in &self.rows {
            out.push_str(row);
            out.push('\n');
        }
        out.push_str(RULE);
        out.push('\n');
        out
    }
}
