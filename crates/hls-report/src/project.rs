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

//! Project-level extraction over solution subdirectories.

use crate::error::ReportError;
use crate::model::ProjectReport;
use crate::solution::Extractor;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

impl Extractor {
    /// Extract every immediate subdirectory of `project` as a solution.
    ///
    /// Solutions are visited in path order. Nested directories below a
    /// solution are never treated as solutions.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ProjectNotFound`] if `project` is not a
    /// directory and [`ReportError::Io`] if it cannot be listed. Failures
    /// inside a solution are recorded on its report.
    pub fn process_project(&self, project: &Path) -> Result<ProjectReport, ReportError> {
        let solutions = discover_solutions(project)?;
        debug!("{} solutions in {}", solutions.len(), project.display());

        let reports = solutions
            .iter()
            .map(|solution| self.process_solution(solution))
            .collect();
        Ok(ProjectReport::new(project, reports))
    }
}

/// Immediate subdirectories of `project`, sorted by path.
///
/// # Errors
///
/// Returns [`ReportError::ProjectNotFound`] if `project` is not a directory.
pub fn discover_solutions(project: &Path) -> Result<Vec<PathBuf>, ReportError> {
    if !project.is_dir() {
        return Err(ReportError::ProjectNotFound {
            path: project.to_path_buf(),
        });
    }

    let entries = fs::read_dir(project).map_err(|e| ReportError::io_error(project, e))?;
    let mut solutions = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReportError::io_error(project, e))?.path();
        if path.is_dir() {
            solutions.push(path);
        }
    }
    solutions.sort();
    Ok(solutions)
}
