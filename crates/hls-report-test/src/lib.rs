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

//! Shared test fixtures for HLS report extraction.
//!
//! Provides generators for the three report formats and a builder that lays
//! them out as a Vivado HLS project on disk.
//!
//! # Quick Start
//!
//! ```rust
//! use hls_report_test::{CosimLog, ImplementationXml, ProjectBuilder, SynthesisXml};
//!
//! let project = ProjectBuilder::new()
//!     .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
//!     .implementation("solution1", "top_export.xml", ImplementationXml::new().render())
//!     .cosim("solution1", "top_cosim.rpt", CosimLog::passing(1207, 1207, 1207).render())
//!     .build();
//!
//! // Reports with values removed, for malformed-document tests
//! let xml = SynthesisXml::pipelined().without("EstimatedClockPeriod").render();
//! ```

pub mod cosim;
pub mod project;
pub mod xml;

pub use cosim::CosimLog;
pub use project::{FixtureProject, ProjectBuilder, IMPL_DIR, SIM_DIR, SYN_DIR};
pub use xml::{Element, ImplementationXml, SynthesisXml};
