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

//! Element-path lookup over parsed report documents.
//!
//! Vivado reports are shallow, schema-less XML where every value is the text of
//! a leaf element. Paths are slash-separated element names resolved through
//! direct children only, starting at the document root element.

use crate::error::ReportError;
use roxmltree::{Document, Node};
use std::path::Path;

/// Parse a report document, mapping syntax errors to [`ReportError::InvalidXml`].
pub fn parse_document<'a>(xml: &'a str, source: &Path) -> Result<Document<'a>, ReportError> {
    Document::parse(xml).map_err(|e| ReportError::InvalidXml {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve a slash-separated element path below `node`.
pub fn find<'a, 'input>(node: Node<'a, 'input>, path: &str) -> Option<Node<'a, 'input>> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .try_fold(node, |current, segment| {
            current
                .children()
                .find(|n| n.is_element() && n.tag_name().name() == segment)
        })
}

/// Trimmed text of an element. Empty elements yield an empty string.
pub fn text_of(node: Node<'_, '_>) -> String {
    node.text().unwrap_or("").trim().to_string()
}

/// Text of an optional element below `node`.
pub fn optional_text(node: Node<'_, '_>, path: &str) -> Option<String> {
    find(node, path).map(text_of)
}

/// Reads required and optional values from one report file.
///
/// Carries the source path so every missing element is reported with the file
/// it was expected in.
pub struct ReportReader<'a, 'input> {
    root: Node<'a, 'input>,
    source: &'a Path,
}

impl<'a, 'input> ReportReader<'a, 'input> {
    /// Start reading at the root element of `doc`.
    pub fn new(doc: &'a Document<'input>, source: &'a Path) -> Self {
        Self {
            root: doc.root_element(),
            source,
        }
    }

    /// Text of a required element.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MalformedDocument`] naming `path` if the element
    /// is missing.
    pub fn required(&self, path: &str) -> Result<String, ReportError> {
        find(self.root, path)
            .map(text_of)
            .ok_or_else(|| ReportError::malformed(self.source, path))
    }

    /// Text of an optional element.
    pub fn optional(&self, path: &str) -> Option<String> {
        optional_text(self.root, path)
    }

    /// A reader scoped to a sub-element, if it exists.
    pub fn section(&self, path: &str) -> Option<ReportReader<'a, 'input>> {
        find(self.root, path).map(|root| ReportReader {
            root,
            source: self.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0"?>
<profile>
  <UserAssignments>
    <TopModelName> top </TopModelName>
    <Part/>
  </UserAssignments>
</profile>"#;

    #[test]
    fn test_find_nested_path() {
        let doc = Document::parse(DOC).unwrap();
        let node = find(doc.root_element(), "UserAssignments/TopModelName").unwrap();
        assert_eq!(text_of(node), "top");
    }

    #[test]
    fn test_find_is_not_recursive() {
        let doc = Document::parse(DOC).unwrap();
        assert!(find(doc.root_element(), "TopModelName").is_none());
    }

    #[test]
    fn test_empty_element_is_present() {
        let doc = Document::parse(DOC).unwrap();
        assert_eq!(optional_text(doc.root_element(), "UserAssignments/Part"), Some(String::new()));
    }

    #[test]
    fn test_required_reports_missing_path() {
        let doc = Document::parse(DOC).unwrap();
        let reader = ReportReader::new(&doc, Path::new("top_csynth.xml"));
        let err = reader.required("ReportVersion/Version").unwrap_err();
        assert_eq!(err, ReportError::malformed("top_csynth.xml", "ReportVersion/Version"));
    }

    #[test]
    fn test_section_scopes_lookup() {
        let doc = Document::parse(DOC).unwrap();
        let reader = ReportReader::new(&doc, Path::new("top_csynth.xml"));
        let section = reader.section("UserAssignments").unwrap();
        assert_eq!(section.required("TopModelName").unwrap(), "top");
        assert!(reader.section("AreaEstimates").is_none());
    }

    #[test]
    fn test_invalid_xml() {
        let err = parse_document("<profile><open></profile>", Path::new("bad.xml")).unwrap_err();
        assert!(matches!(err, ReportError::InvalidXml { .. }));
    }
}
