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

//! Post-implementation report (`impl/report/verilog/<top>_export.xml`).

use crate::error::ReportError;
use crate::model::ImplementationMetrics;
use crate::xml::{parse_document, ReportReader};
use std::path::Path;

/// Parse an implementation report. Every value is required.
///
/// # Errors
///
/// Returns [`ReportError::InvalidXml`] for syntax errors and
/// [`ReportError::MalformedDocument`] for the first missing element.
pub fn parse_implementation(xml: &str, source: &Path) -> Result<ImplementationMetrics, ReportError> {
    let doc = parse_document(xml, source)?;
    let report = ReportReader::new(&doc, source);

    Ok(ImplementationMetrics {
        slice: report.required("AreaReport/Resources/SLICE")?,
        lut: report.required("AreaReport/Resources/LUT")?,
        ff: report.required("AreaReport/Resources/FF")?,
        srl: report.required("AreaReport/Resources/SRL")?,
        bram: report.required("AreaReport/Resources/BRAM")?,
        dsp: report.required("AreaReport/Resources/DSP")?,
        target_clock_period: report.required("TimingReport/TargetClockPeriod")?,
        achieved_clock_period: report.required("TimingReport/AchievedClockPeriod")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hls_report_test::ImplementationXml;

    fn source() -> &'static Path {
        Path::new("solution1/impl/report/verilog/top_export.xml")
    }

    #[test]
    fn test_parse_full_report() {
        let xml = ImplementationXml::new().render();
        let metrics = parse_implementation(&xml, source()).unwrap();

        assert_eq!(metrics.slice, "1520");
        assert_eq!(metrics.lut, "4120");
        assert_eq!(metrics.ff, "3011");
        assert_eq!(metrics.srl, "37");
        assert_eq!(metrics.bram, "7");
        assert_eq!(metrics.dsp, "18");
        assert_eq!(metrics.target_clock_period, "10.000");
        assert_eq!(metrics.achieved_clock_period, "8.902");
    }

    #[test]
    fn test_every_field_is_required() {
        for element in ["SLICE", "LUT", "FF", "SRL", "BRAM", "DSP", "TargetClockPeriod", "AchievedClockPeriod"] {
            let xml = ImplementationXml::new().without(element).render();
            let err = parse_implementation(&xml, source()).unwrap_err();
            match err {
                ReportError::MalformedDocument { node, .. } => assert!(node.ends_with(element)),
                other => panic!("expected malformed document for {}, got {:?}", element, other),
            }
        }
    }

    #[test]
    fn test_missing_timing_section() {
        let xml = ImplementationXml::new().without("TimingReport").render();
        let err = parse_implementation(&xml, source()).unwrap_err();
        assert_eq!(err, ReportError::malformed(source(), "TimingReport/TargetClockPeriod"));
    }

    #[test]
    fn test_overridden_value() {
        let xml = ImplementationXml::new().set("DSP", "0").render();
        assert_eq!(parse_implementation(&xml, source()).unwrap().dsp, "0");
    }
}
