// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Plain English explanations of METAR and TAF reports.
//!
//! A report is parsed by a [`ReportParser`] into its groups. Every group is
//! then [rendered] into a sentence and the sentences are assembled with the
//! report's metadata into an [`Explanation`]. The explanation prints as text
//! and, with the `serde` feature, serializes e.g. to JSON.
//!
//! # Examples
//!
//! ```
//! use metar::groups::{Group, GroupInfo, Keyword, ReportPart};
//! use metar::{ParseResult, ReportKind, ReportMetadata};
//!
//! let parser = |report: &str| ParseResult {
//!     metadata: ReportMetadata {
//!         kind: ReportKind::Metar,
//!         location: "KLAX".to_string(),
//!         ..Default::default()
//!     },
//!     groups: report
//!         .split_whitespace()
//!         .map(|raw| match raw {
//!             "METAR" => GroupInfo::new(Group::Keyword(Keyword::Metar), ReportPart::Header, raw),
//!             _ => GroupInfo::new(Group::Location(raw.to_string()), ReportPart::Header, raw),
//!         })
//!         .collect(),
//! };
//!
//! let explanation = metar_explain::explain(&parser, "  METAR KLAX\n");
//!
//! assert_eq!(explanation.report_type, "METAR");
//! assert_eq!(
//!     explanation.explanations().collect::<Vec<_>>(),
//!     [
//!         "Report type: METAR (weather observation report)",
//!         "ICAO airport code: KLAX",
//!     ]
//! );
//! ```
//!
//! [rendered]: crate::render::render

use log::debug;
use metar::ReportParser;

mod assembler;
mod explanation;
mod printer;

pub mod render;

pub use assembler::{assemble, error_message};
pub use explanation::{Explanation, GroupExplanation};

/// Explains the `report` parsed by the `parser`.
///
/// Whitespace around the report is removed before it is parsed. Errors of
/// the parser don't stop the explanation but are reported in
/// [`Explanation::error`] next to the groups parsed so far.
pub fn explain<P>(parser: &P, report: &str) -> Explanation
where
    P: ReportParser + ?Sized,
{
    let report = report.trim();
    debug!("explaining report {:?}", report);

    let result = parser.parse(report);
    assemble(&result.metadata, &result.groups)
}
