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

//! HLS synthesis estimate report (`<top>_csynth.xml`).

use crate::error::ReportError;
use crate::model::SynthesisEstimate;
use crate::xml::{parse_document, ReportReader};
use std::path::Path;

const LATENCY_SUMMARY: &str = "PerformanceEstimates/SummaryOfOverallLatency";

/// Parse a synthesis report.
///
/// Latency, initiation interval and pipeline depth are optional because
/// non-pipelined designs, and some toolchain versions, leave them out. All
/// other values are required.
///
/// # Errors
///
/// Returns [`ReportError::InvalidXml`] for syntax errors and
/// [`ReportError::MalformedDocument`] for the first missing required element.
///
/// # Examples
///
/// ```rust
/// use hls_report::parse_synthesis;
/// use std::path::Path;
///
/// let xml = r#"<profile>
///   <ReportVersion><Version>2015.4</Version></ReportVersion>
///   <UserAssignments><Part>xc7z020clg484-1</Part><TopModelName>top</TopModelName></UserAssignments>
///   <PerformanceEstimates>
///     <SummaryOfTimingAnalysis><EstimatedClockPeriod>8.41</EstimatedClockPeriod></SummaryOfTimingAnalysis>
///   </PerformanceEstimates>
///   <AreaEstimates><Resources><BRAM_18K>4</BRAM_18K><FF>512</FF><LUT>1024</LUT></Resources></AreaEstimates>
/// </profile>"#;
///
/// let estimate = parse_synthesis(xml, Path::new("top_csynth.xml")).unwrap();
/// assert_eq!(estimate.name, "top");
/// assert_eq!(estimate.pipeline_depth, None);
/// ```
pub fn parse_synthesis(xml: &str, source: &Path) -> Result<SynthesisEstimate, ReportError> {
    let doc = parse_document(xml, source)?;
    let report = ReportReader::new(&doc, source);

    let latency = report.section(LATENCY_SUMMARY);
    let latency_value = |name: &str| latency.as_ref().and_then(|s| s.optional(name));

    Ok(SynthesisEstimate {
        name: report.required("UserAssignments/TopModelName")?,
        version: report.required("ReportVersion/Version")?,
        device: report.required("UserAssignments/Part")?,
        avg_latency: latency_value("Average-caseLatency"),
        worst_latency: latency_value("Worst-caseLatency"),
        initiation_interval: latency_value("PipelineInitiationInterval"),
        pipeline_depth: latency_value("PipelineDepth"),
        estimated_clock_period: report
            .required("PerformanceEstimates/SummaryOfTimingAnalysis/EstimatedClockPeriod")?,
        estimated_lut: report.required("AreaEstimates/Resources/LUT")?,
        estimated_ff: report.required("AreaEstimates/Resources/FF")?,
        estimated_bram: report.required("AreaEstimates/Resources/BRAM_18K")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hls_report_test::SynthesisXml;

    fn source() -> &'static Path {
        Path::new("solution1/syn/report/top_csynth.xml")
    }

    #[test]
    fn test_parse_pipelined_design() {
        let xml = SynthesisXml::pipelined().render();
        let estimate = parse_synthesis(&xml, source()).unwrap();

        assert_eq!(estimate.name, "top");
        assert_eq!(estimate.version, "2016.2");
        assert_eq!(estimate.device, "xc7z020clg484-1");
        assert_eq!(estimate.avg_latency.as_deref(), Some("1207"));
        assert_eq!(estimate.worst_latency.as_deref(), Some("1209"));
        assert_eq!(estimate.initiation_interval.as_deref(), Some("1"));
        assert_eq!(estimate.pipeline_depth.as_deref(), Some("12"));
        assert_eq!(estimate.estimated_clock_period, "8.41");
        assert_eq!(estimate.estimated_lut, "4312");
        assert_eq!(estimate.estimated_ff, "2876");
        assert_eq!(estimate.estimated_bram, "14");
    }

    #[test]
    fn test_missing_pipeline_depth_is_none() {
        let xml = SynthesisXml::pipelined().without("PipelineDepth").render();
        let estimate = parse_synthesis(&xml, source()).unwrap();
        assert_eq!(estimate.pipeline_depth, None);
        assert_eq!(estimate.initiation_interval.as_deref(), Some("1"));
    }

    #[test]
    fn test_non_pipelined_design() {
        let xml = SynthesisXml::unpipelined().render();
        let estimate = parse_synthesis(&xml, source()).unwrap();
        assert_eq!(estimate.initiation_interval, None);
        assert_eq!(estimate.pipeline_depth, None);
        assert!(estimate.avg_latency.is_some());
    }

    #[test]
    fn test_missing_latency_summary() {
        let xml = SynthesisXml::pipelined()
            .without("SummaryOfOverallLatency")
            .render();
        let estimate = parse_synthesis(&xml, source()).unwrap();
        assert_eq!(estimate.avg_latency, None);
        assert_eq!(estimate.worst_latency, None);
        assert_eq!(estimate.estimated_clock_period, "8.41");
    }

    #[test]
    fn test_missing_clock_period_is_malformed() {
        let xml = SynthesisXml::pipelined()
            .without("EstimatedClockPeriod")
            .render();
        let err = parse_synthesis(&xml, source()).unwrap_err();
        assert_eq!(
            err,
            ReportError::malformed(
                source(),
                "PerformanceEstimates/SummaryOfTimingAnalysis/EstimatedClockPeriod"
            )
        );
    }

    #[test]
    fn test_missing_bram_is_malformed() {
        let xml = SynthesisXml::pipelined().without("BRAM_18K").render();
        let err = parse_synthesis(&xml, source()).unwrap_err();
        assert!(matches!(err, ReportError::MalformedDocument { ref node, .. } if node == "AreaEstimates/Resources/BRAM_18K"));
    }

    #[test]
    fn test_entity_text_is_decoded() {
        let xml = SynthesisXml::pipelined().set("TopModelName", "a<b").render();
        assert_eq!(parse_synthesis(&xml, source()).unwrap().name, "a<b");
    }

    #[test]
    fn test_not_xml() {
        let err = parse_synthesis("Synthesis log, not xml", source()).unwrap_err();
        assert!(matches!(err, ReportError::InvalidXml { .. }));
    }
}
