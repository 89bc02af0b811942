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

//! Report file selection.
//!
//! Each report directory normally holds exactly one report of interest, but
//! the toolchain also writes per-submodule reports next to the top-level one.
//! When a pattern matches zero or several files, a [`SelectionPolicy`] picks
//! the candidate. The default [`ShortestName`] relies on the top-level report
//! having the shortest name (`top_csynth.xml` vs `top_sub_csynth.xml`), which
//! is a heuristic.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hls_report::locator::{ReportLocator, MostRecentlyModified};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), hls_report::ReportError> {
//! let locator = ReportLocator::default();
//! let located = locator.locate(Path::new("prj/solution1/syn/report"), "*.xml", None)?;
//! println!("{}", located.path.display());
//!
//! let by_mtime = ReportLocator::new(Box::new(MostRecentlyModified));
//! # Ok(())
//! # }
//! ```

use crate::config::ForcedReport;
use crate::error::ReportError;
use glob::{MatchOptions, Pattern};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, warn};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Strategy for choosing one report among zero or several candidates.
///
/// Only consulted when the pattern did not match exactly one file.
pub trait SelectionPolicy: Send + Sync {
    /// Policy name for diagnostics
    fn name(&self) -> &str;

    /// Pick a candidate, or `None` when there is nothing to pick.
    fn select(&self, candidates: &[PathBuf]) -> Option<PathBuf>;
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Shortest file name wins; equal lengths are ordered lexically.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestName;

impl SelectionPolicy for ShortestName {
    fn name(&self) -> &str {
        "shortest-name"
    }

    fn select(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates
            .iter()
            .min_by_key(|p| {
                let name = file_name_of(p);
                (name.chars().count(), name)
            })
            .cloned()
    }
}

/// Latest modification time wins; files without a readable mtime lose, ties
/// are ordered lexically.
#[derive(Debug, Clone, Copy, Default)]
pub struct MostRecentlyModified;

impl SelectionPolicy for MostRecentlyModified {
    fn name(&self) -> &str {
        "most-recently-modified"
    }

    fn select(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        candidates
            .iter()
            .map(|p| {
                let mtime = fs::metadata(p)
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (mtime, p)
            })
            .max_by(|(ta, a), (tb, b)| ta.cmp(tb).then_with(|| file_name_of(b).cmp(&file_name_of(a))))
            .map(|(_, p)| p.clone())
    }
}

/// The outcome of a successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Located {
    /// The selected report file
    pub path: PathBuf,
    /// How many files matched the pattern (0 when the forced rule applied)
    pub candidates: usize,
    /// Whether a [`ForcedReport`] rule chose the file
    pub forced: bool,
}

impl Located {
    /// Whether the choice was a best-effort guess among several files.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates > 1
    }
}

/// Finds the report file to parse inside a report directory.
pub struct ReportLocator {
    policy: Box<dyn SelectionPolicy>,
    forced: Option<ForcedReport>,
}

impl Default for ReportLocator {
    fn default() -> Self {
        Self::new(Box::new(ShortestName))
    }
}

impl ReportLocator {
    /// Create a locator using `policy` for ambiguous directories.
    pub fn new(policy: Box<dyn SelectionPolicy>) -> Self {
        Self {
            policy,
            forced: None,
        }
    }

    /// Add a forced file-name rule applied when a path hint is given.
    pub fn with_forced(mut self, forced: Option<ForcedReport>) -> Self {
        self.forced = forced;
        self
    }

    /// The active selection policy.
    pub fn policy(&self) -> &dyn SelectionPolicy {
        self.policy.as_ref()
    }

    /// Select the report in `directory` matching `pattern`.
    ///
    /// `path_hint` is the solution directory; when its final segment matches
    /// the forced rule, the rule's file name is used without listing the
    /// directory.
    ///
    /// # Errors
    ///
    /// - [`ReportError::MissingDirectory`] if `directory` does not exist
    /// - [`ReportError::NoCandidateFile`] if nothing can be selected
    /// - [`ReportError::InvalidPattern`] if `pattern` is not a valid glob
    /// - [`ReportError::Io`] if the directory cannot be listed
    pub fn locate(
        &self,
        directory: &Path,
        pattern: &str,
        path_hint: Option<&Path>,
    ) -> Result<Located, ReportError> {
        if !directory.is_dir() {
            return Err(ReportError::MissingDirectory {
                path: directory.to_path_buf(),
            });
        }

        if let Some(forced) = self.forced_rule(path_hint) {
            let path = directory.join(&forced.file_name);
            if !path.is_file() {
                return Err(ReportError::no_candidate(directory, forced.file_name.as_str()));
            }
            debug!("Forced report {} for {}", path.display(), forced.segment);
            return Ok(Located {
                path,
                candidates: 0,
                forced: true,
            });
        }

        let candidates = list_matching(directory, pattern)?;
        if let [only] = candidates.as_slice() {
            return Ok(Located {
                path: only.clone(),
                candidates: 1,
                forced: false,
            });
        }

        let path = self
            .policy
            .select(&candidates)
            .ok_or_else(|| ReportError::no_candidate(directory, pattern))?;

        warn!(
            "Found {} files matching '{}' in '{}', selected '{}' ({})",
            candidates.len(),
            pattern,
            directory.display(),
            file_name_of(&path),
            self.policy.name()
        );

        Ok(Located {
            path,
            candidates: candidates.len(),
            forced: false,
        })
    }

    fn forced_rule(&self, path_hint: Option<&Path>) -> Option<&ForcedReport> {
        let forced = self.forced.as_ref()?;
        let segment = path_hint?.file_name()?;
        (segment == forced.segment.as_str()).then_some(forced)
    }
}

/// Regular files directly in `directory` whose names match `pattern`, sorted.
fn list_matching(directory: &Path, pattern: &str) -> Result<Vec<PathBuf>, ReportError> {
    let compiled = Pattern::new(pattern).map_err(|e| ReportError::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let entries = fs::read_dir(directory).map_err(|e| ReportError::io_error(directory, e))?;
    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ReportError::io_error(directory, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let name = entry.file_name();
        if compiled.matches_with(&name.to_string_lossy(), MATCH_OPTIONS) {
            matches.push(path);
        }
    }
    matches.sort();
    debug!("{} candidates for '{}' in {}", matches.len(), pattern, directory.display());
    Ok(matches)
}
