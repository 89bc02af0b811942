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

//! CLI integration tests

use assert_cmd::Command;
use hls_report_test::{CosimLog, ImplementationXml, ProjectBuilder, SynthesisXml};
use predicates::prelude::*;

// Test helper to create an hls-report command
fn hls_report_cmd() -> Command {
    Command::cargo_bin("hls-report").expect("Failed to find hls-report binary")
}

// ===== Help and Usage Tests =====

#[test]
fn test_help_output() {
    hls_report_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("PROJECT_DIR"));
}

#[test]
fn test_missing_argument() {
    hls_report_cmd()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_extra_argument() {
    hls_report_cmd()
        .args(["prj_a", "prj_b"])
        .assert()
        .code(1);
}

// ===== Project Tests =====

#[test]
fn test_missing_project() {
    let dir = tempfile::tempdir().unwrap();
    hls_report_cmd()
        .arg(dir.path().join("no_such_prj"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cannot find project"));
}

#[test]
fn test_full_solution() {
    let project = ProjectBuilder::new()
        .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
        .implementation("solution1", "top_export.xml", ImplementationXml::new().render())
        .cosim("solution1", "top_cosim.rpt", CosimLog::passing(1205, 1207, 1209).render())
        .build();

    hls_report_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("** Syn. Report **"))
        .stdout(predicate::str::contains("Device      : xc7z020clg484-1"))
        .stdout(predicate::str::contains("Actual-CP   : 8.902"))
        .stdout(predicate::str::contains("Avg         : 1207"))
        .stdout(predicate::str::contains("-not found-").not())
        .stderr(predicate::str::contains("Parsing"));
}

#[test]
fn test_synthesis_only_solution() {
    let project = ProjectBuilder::new()
        .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
        .build();

    hls_report_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name        : top"))
        .stdout(predicate::str::contains("Slice       : -not found-"))
        .stdout(predicate::str::contains("Min         : -not found-"));
}

#[test]
fn test_empty_project_has_no_data() {
    let project = ProjectBuilder::new().build();
    hls_report_cmd()
        .arg(project.path())
        .assert()
        .code(2)
        .stdout("\n");
}

#[test]
fn test_no_solution_with_data() {
    let project = ProjectBuilder::new()
        .empty_solution("solution1")
        .empty_solution("solution2")
        .build();

    hls_report_cmd()
        .arg(project.path())
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Solution:").not());
}

#[test]
fn test_one_failed_solution_still_succeeds() {
    let project = ProjectBuilder::new()
        .empty_solution("broken")
        .implementation("working", "top_export.xml", ImplementationXml::new().render())
        .build();

    hls_report_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("working"))
        .stdout(predicate::str::contains("broken").not());
}

#[test]
fn test_log_filter_from_env() {
    let project = ProjectBuilder::new()
        .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
        .build();

    hls_report_cmd()
        .env("RUST_LOG", "off")
        .arg(project.path())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ===== Environment Tests =====

#[test]
fn test_max_file_size_from_env() {
    let project = ProjectBuilder::new()
        .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
        .build();

    hls_report_cmd()
        .env("HLS_REPORT_MAX_FILE_SIZE", "16")
        .arg(project.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("too large"));
}

#[test]
fn test_unparsable_max_file_size_uses_default() {
    let project = ProjectBuilder::new()
        .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
        .build();

    hls_report_cmd()
        .env("HLS_REPORT_MAX_FILE_SIZE", "sixteen")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name        : top"))
        .stderr(predicate::str::contains("too large").not());
}

// ===== Diagnostics Tests =====

#[test]
fn test_cosim_without_pass_is_a_warning() {
    let project = ProjectBuilder::new()
        .synthesis("solution1", "top_csynth.xml", SynthesisXml::pipelined().render())
        .cosim(
            "solution1",
            "top_cosim.rpt",
            CosimLog::new().row("Verilog", "Fail", Some([1, 2, 3])).render(),
        )
        .build();

    hls_report_cmd()
        .arg(project.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Cannot find Verilog sim results"))
        .stderr(predicate::str::contains("WARN"))
        .stderr(predicate::str::contains("ERROR").not());
}
