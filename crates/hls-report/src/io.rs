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

//! Size-checked report reading.

use crate::error::ReportError;
use std::fs;
use std::path::Path;

/// Read a report file into a string, rejecting files above `max_size` bytes.
///
/// The size is checked from metadata before anything is read. Bytes that are
/// not valid UTF-8 are replaced, since tool logs occasionally carry stray
/// Latin-1 from the host locale.
///
/// # Errors
///
/// Returns [`ReportError::Io`] if the metadata or contents cannot be read and
/// [`ReportError::FileTooLarge`] if the file exceeds the limit.
pub fn read_report(path: &Path, max_size: u64) -> Result<String, ReportError> {
    let metadata = fs::metadata(path).map_err(|e| ReportError::io_error(path, e))?;

    if metadata.len() > max_size {
        return Err(ReportError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max: max_size,
        });
    }

    let bytes = fs::read(path).map_err(|e| ReportError::io_error(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
