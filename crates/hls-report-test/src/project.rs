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

//! On-disk HLS project trees in a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Synthesis report directory inside a solution.
pub const SYN_DIR: &str = "syn/report";
/// Implementation report directory inside a solution.
pub const IMPL_DIR: &str = "impl/report/verilog";
/// Co-simulation report directory inside a solution.
pub const SIM_DIR: &str = "sim/report";

/// Fluent builder for a project directory with solution subdirectories.
///
/// Panics on I/O failure; it is only meant for tests.
///
/// # Examples
///
/// ```rust
/// use hls_report_test::{CosimLog, ProjectBuilder, SynthesisXml};
///
/// let project = ProjectBuilder::new()
///     .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
///     .cosim("solution1", "top_cosim.rpt", CosimLog::passing(1, 2, 3).render())
///     .empty_solution("solution2")
///     .build();
///
/// assert!(project.solution_path("solution1").join("syn/report/top_csynth.xml").is_file());
/// assert!(project.solution_path("solution2").is_dir());
/// ```
pub struct ProjectBuilder {
    dir: TempDir,
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectBuilder {
    /// Start an empty project.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp project"),
        }
    }

    /// Write `content` to `relative` inside the project, creating parents.
    pub fn file(self, relative: impl AsRef<Path>, content: impl AsRef<[u8]>) -> Self {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        self
    }

    /// Create a directory inside the project.
    pub fn dir(self, relative: impl AsRef<Path>) -> Self {
        fs::create_dir_all(self.dir.path().join(relative)).expect("Failed to create fixture directory");
        self
    }

    /// Create a solution directory with no reports.
    pub fn empty_solution(self, solution: &str) -> Self {
        self.dir(solution)
    }

    /// Add a synthesis report to `solution`.
    pub fn synthesis(self, solution: &str, file: &str, content: impl AsRef<[u8]>) -> Self {
        self.file(Path::new(solution).join(SYN_DIR).join(file), content)
    }

    /// Add an implementation report to `solution`.
    pub fn implementation(self, solution: &str, file: &str, content: impl AsRef<[u8]>) -> Self {
        self.file(Path::new(solution).join(IMPL_DIR).join(file), content)
    }

    /// Add a co-simulation report to `solution`.
    pub fn cosim(self, solution: &str, file: &str, content: impl AsRef<[u8]>) -> Self {
        self.file(Path::new(solution).join(SIM_DIR).join(file), content)
    }

    /// Finish building; the tree lives as long as the returned value.
    pub fn build(self) -> FixtureProject {
        FixtureProject { dir: self.dir }
    }
}

/// A project tree on disk, removed on drop.
pub struct FixtureProject {
    dir: TempDir,
}

impl FixtureProject {
    /// The project directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The directory of a solution.
    pub fn solution_path(&self, solution: &str) -> PathBuf {
        self.dir.path().join(solution)
    }
}
