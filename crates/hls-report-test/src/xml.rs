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

//! Report XML document builders.
//!
//! Documents follow the element layout Vivado HLS 2015-2016 writes. Builders
//! start from a complete report; `set` and `without` apply to every element
//! with the given tag name, so `without("LUT")` also drops the LUT entry of
//! `AvailableResources`.

/// A minimal element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Tag name
    pub name: String,
    /// Text content of leaf elements
    pub text: Option<String>,
    /// Child elements
    pub children: Vec<Element>,
}

impl Element {
    /// A leaf element with text.
    pub fn leaf(name: &str, text: &str) -> Self {
        Self {
            name: name.to_string(),
            text: Some(text.to_string()),
            children: Vec::new(),
        }
    }

    /// An element with children.
    pub fn node(name: &str, children: Vec<Element>) -> Self {
        Self {
            name: name.to_string(),
            text: None,
            children,
        }
    }

    fn remove_all(&mut self, name: &str) {
        self.children.retain(|c| c.name != name);
        for child in &mut self.children {
            child.remove_all(name);
        }
    }

    fn set_all(&mut self, name: &str, text: &str) {
        if self.name == name {
            self.text = Some(text.to_string());
        }
        for child in &mut self.children {
            child.set_all(name, text);
        }
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        match (&self.text, self.children.is_empty()) {
            (Some(text), true) => {
                out.push_str(&format!("{}<{}>{}</{}>\n", indent, self.name, escape(text), self.name));
            }
            (None, true) => out.push_str(&format!("{}<{}/>\n", indent, self.name)),
            _ => {
                out.push_str(&format!("{}<{}>\n", indent, self.name));
                for child in &self.children {
                    child.write(out, depth + 1);
                }
                out.push_str(&format!("{}</{}>\n", indent, self.name));
            }
        }
    }

    /// Serialize with an XML declaration.
    pub fn render(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write(&mut out, 0);
        out
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

macro_rules! report_builder {
    ($name:ident) => {
        impl $name {
            /// Replace the text of every element named `element`.
            pub fn set(mut self, element: &str, text: &str) -> Self {
                self.root.set_all(element, text);
                self
            }

            /// Remove every element named `element`, with its subtree.
            pub fn without(mut self, element: &str) -> Self {
                self.root.remove_all(element);
                self
            }

            /// The document as text.
            pub fn render(&self) -> String {
                self.root.render()
            }
        }
    };
}

/// Synthesis report (`<top>_csynth.xml`) builder.
///
/// # Examples
///
/// ```rust
/// use hls_report_test::SynthesisXml;
///
/// let xml = SynthesisXml::pipelined().without("PipelineDepth").render();
/// assert!(xml.contains("<TopModelName>top</TopModelName>"));
/// assert!(!xml.contains("PipelineDepth"));
/// ```
#[derive(Debug, Clone)]
pub struct SynthesisXml {
    root: Element,
}

report_builder!(SynthesisXml);

impl SynthesisXml {
    /// A pipelined design reporting every latency field.
    pub fn pipelined() -> Self {
        let latency = vec![
            Element::leaf("Best-caseLatency", "1205"),
            Element::leaf("Average-caseLatency", "1207"),
            Element::leaf("Worst-caseLatency", "1209"),
            Element::leaf("Interval-min", "1"),
            Element::leaf("Interval-max", "1"),
            Element::leaf("PipelineInitiationInterval", "1"),
            Element::leaf("PipelineDepth", "12"),
        ];
        Self::with_latency(latency)
    }

    /// A non-pipelined design: no initiation interval or depth.
    pub fn unpipelined() -> Self {
        let latency = vec![
            Element::leaf("Best-caseLatency", "4567"),
            Element::leaf("Average-caseLatency", "4570"),
            Element::leaf("Worst-caseLatency", "4573"),
            Element::leaf("Interval-min", "4568"),
            Element::leaf("Interval-max", "4574"),
        ];
        Self::with_latency(latency)
    }

    fn with_latency(latency: Vec<Element>) -> Self {
        let root = Element::node(
            "profile",
            vec![
                Element::node("ReportVersion", vec![Element::leaf("Version", "2016.2")]),
                Element::node(
                    "UserAssignments",
                    vec![
                        Element::leaf("unit", "ns"),
                        Element::leaf("ProductFamily", "zynq"),
                        Element::leaf("Part", "xc7z020clg484-1"),
                        Element::leaf("TopModelName", "top"),
                        Element::leaf("TargetClockPeriod", "10.00"),
                        Element::leaf("ClockUncertainty", "1.25"),
                    ],
                ),
                Element::node(
                    "PerformanceEstimates",
                    vec![
                        Element::node(
                            "SummaryOfTimingAnalysis",
                            vec![
                                Element::leaf("unit", "ns"),
                                Element::leaf("EstimatedClockPeriod", "8.41"),
                            ],
                        ),
                        Element::node(
                            "SummaryOfOverallLatency",
                            [vec![Element::leaf("unit", "clock cycles")], latency].concat(),
                        ),
                    ],
                ),
                Element::node(
                    "AreaEstimates",
                    vec![
                        Element::node(
                            "Resources",
                            vec![
                                Element::leaf("BRAM_18K", "14"),
                                Element::leaf("DSP48E", "22"),
                                Element::leaf("FF", "2876"),
                                Element::leaf("LUT", "4312"),
                            ],
                        ),
                        Element::node(
                            "AvailableResources",
                            vec![
                                Element::leaf("BRAM_18K", "280"),
                                Element::leaf("DSP48E", "220"),
                                Element::leaf("FF", "106400"),
                                Element::leaf("LUT", "53200"),
                            ],
                        ),
                    ],
                ),
                Element::node(
                    "InterfaceSummary",
                    vec![Element::node(
                        "RtlPorts",
                        vec![
                            Element::leaf("name", "ap_clk"),
                            Element::leaf("Object", "top"),
                            Element::leaf("Type", "return value"),
                            Element::leaf("Scope", ""),
                            Element::leaf("IOProtocol", "ap_ctrl_hs"),
                            Element::leaf("IOConfig", ""),
                            Element::leaf("Dir", "in"),
                            Element::leaf("Bits", "1"),
                        ],
                    )],
                ),
            ],
        );
        Self { root }
    }
}

/// Implementation report (`<top>_export.xml`) builder.
#[derive(Debug, Clone)]
pub struct ImplementationXml {
    root: Element,
}

report_builder!(ImplementationXml);

impl Default for ImplementationXml {
    fn default() -> Self {
        Self::new()
    }
}

impl ImplementationXml {
    /// A complete post place-and-route report.
    pub fn new() -> Self {
        let resources = |values: [&str; 6]| {
            ["SLICE", "LUT", "FF", "DSP", "SRL", "BRAM"]
                .into_iter()
                .zip(values)
                .map(|(name, value)| Element::leaf(name, value))
                .collect::<Vec<_>>()
        };

        let root = Element::node(
            "profile",
            vec![
                Element::node(
                    "RunData",
                    vec![
                        Element::leaf("RUN_TYPE", "impl"),
                        Element::leaf("VIVADO_VERSION", "v.2016.2"),
                        Element::leaf("ROOT_MODULE", "top"),
                    ],
                ),
                Element::node(
                    "TimingReport",
                    vec![
                        Element::leaf("TargetClockPeriod", "10.000"),
                        Element::leaf("AchievedClockPeriod", "8.902"),
                    ],
                ),
                Element::node(
                    "AreaReport",
                    vec![
                        Element::node("Resources", resources(["1520", "4120", "3011", "18", "37", "7"])),
                        Element::node(
                            "AvailableResources",
                            resources(["13300", "53200", "106400", "220", "17400", "140"]),
                        ),
                    ],
                ),
            ],
        );
        Self { root }
    }
}
