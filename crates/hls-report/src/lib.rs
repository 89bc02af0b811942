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

//! Vivado HLS report extraction.
//!
//! Collects the build metrics of every solution in an HLS project directory:
//!
//! ```text
//! <project>/<solution>/syn/report/*.xml            synthesis estimate
//! <project>/<solution>/impl/report/verilog/*.xml   implementation results
//! <project>/<solution>/sim/report/*cosim.rpt       co-simulation latency
//! ```
//!
//! # Features
//!
//! - Report lookup with a swappable [`SelectionPolicy`] for directories holding
//!   several candidate files
//! - Typed records with explicit optional fields for values that only
//!   pipelined designs report
//! - Per-report-kind error isolation: a missing or malformed report never
//!   hides the others, and one solution never aborts its siblings
//! - Stable fixed-column text rendering with explicit placeholders
//!
//! # Examples
//!
//! ```rust,no_run
//! use hls_report::{render_project, Extractor};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), hls_report::ReportError> {
//! let project = Extractor::default().process_project(Path::new("hls_prj"))?;
//! print!("{}", render_project(&project));
//!
//! for solution in project.failures() {
//!     for (kind, error) in &solution.failures {
//!         eprintln!("{}: {} report: {}", solution.path.display(), kind, error);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Reports can also be parsed directly from text:
//!
//! ```rust
//! use hls_report::parse_cosim;
//! use std::path::Path;
//!
//! let log = "|   Verilog|      Pass|      42|      42|      42|";
//! assert_eq!(parse_cosim(log, Path::new("top_cosim.rpt")).unwrap().avg_latency, 42);
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through `tracing`: `info` for each report file
//! parsed, `warn` for absent reports and ambiguous file choices, `error` for
//! unreadable or malformed reports.

pub mod config;
pub mod cosim;
pub mod error;
pub mod implementation;
pub mod io;
pub mod locator;
pub mod model;
pub mod present;
pub mod project;
pub mod solution;
pub mod synthesis;
pub mod xml;

pub use config::{ExtractConfig, ForcedReport, DEFAULT_MAX_FILE_SIZE, MAX_FILE_SIZE_ENV};
pub use cosim::parse_cosim;
pub use error::ReportError;
pub use implementation::parse_implementation;
pub use locator::{Located, MostRecentlyModified, ReportLocator, SelectionPolicy, ShortestName};
pub use model::{
    CosimResult, ImplementationMetrics, ProjectReport, ReportKind, SolutionReport,
    SynthesisEstimate,
};
pub use present::{render_project, render_solution, PLACEHOLDER};
pub use project::discover_solutions;
pub use solution::Extractor;
pub use synthesis::parse_synthesis;
