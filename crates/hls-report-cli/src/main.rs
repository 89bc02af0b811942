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

//! `hls-report` command line interface

use clap::Parser;
use hls_report_cli::{init_logging, run, ExitStatus};
use std::path::PathBuf;
use std::process::ExitCode;

/// Summarize Vivado HLS build metrics for every solution of a project
///
/// Reads the synthesis, implementation and co-simulation reports of each
/// solution directory under PROJECT_DIR and prints one block per solution.
///
/// # Examples
///
/// ```bash
/// hls-report ./hls_prj
///
/// # With report file selection details
/// RUST_LOG=hls_report=debug hls-report ./hls_prj
/// ```
#[derive(Parser)]
#[command(name = "hls-report")]
#[command(author, version, about = "Summarize Vivado HLS project build metrics", long_about = None)]
struct Cli {
    /// HLS project directory containing solution subdirectories
    #[arg(value_name = "PROJECT_DIR")]
    project: PathBuf,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and are not failures.
            let _ = e.print();
            return if e.use_stderr() {
                ExitStatus::Failure.into()
            } else {
                ExitStatus::Success.into()
            };
        }
    };

    init_logging();
    run(&cli.project).into()
}
