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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::groups::{GroupInfo, ReportTime};

/// Type of a report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportKind {
    #[default]
    Unknown,
    Metar,
    Taf,
}

/// Error a parser encountered in the report.
///
/// The parser stops at the first error, thus a report has at most one error.
/// Codes unknown to this crate are kept as [`Other`](ReportError::Other).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportError {
    #[default]
    None,
    EmptyReport,
    ExpectedReportTypeOrLocation,
    ExpectedLocation,
    ExpectedReportTime,
    ExpectedTimeSpan,
    UnexpectedReportEnd,
    UnexpectedGroupAfterNil,
    UnexpectedGroupAfterCnl,
    UnexpectedNilOrCnlInReportBody,
    AmdAllowedInTafOnly,
    CnlAllowedInTafOnly,
    MaintenanceIndicatorAllowedInMetarOnly,
    ReportTooLarge,
    Other(u16),
}

impl ReportError {
    /// Returns the error of a parser's numeric error code.
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Self::None,
            1 => Self::EmptyReport,
            2 => Self::ExpectedReportTypeOrLocation,
            3 => Self::ExpectedLocation,
            4 => Self::ExpectedReportTime,
            5 => Self::ExpectedTimeSpan,
            6 => Self::UnexpectedReportEnd,
            7 => Self::UnexpectedGroupAfterNil,
            8 => Self::UnexpectedGroupAfterCnl,
            9 => Self::UnexpectedNilOrCnlInReportBody,
            10 => Self::AmdAllowedInTafOnly,
            11 => Self::CnlAllowedInTafOnly,
            12 => Self::MaintenanceIndicatorAllowedInMetarOnly,
            13 => Self::ReportTooLarge,
            code => Self::Other(code),
        }
    }

    pub fn is_error(&self) -> bool {
        *self != Self::None
    }
}

/// Report wide information collected by the parser.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportMetadata {
    pub kind: ReportKind,
    pub error: ReportError,
    /// ICAO location indicator of the station.
    pub location: String,
    pub time: Option<ReportTime>,
    /// Unscheduled report (`SPECI`).
    pub is_speci: bool,
    pub is_automated: bool,
    pub is_nil: bool,
    pub is_cancelled: bool,
    pub is_amended: bool,
    pub is_correctional: bool,
}

/// The groups and metadata of a parsed report.
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParseResult {
    pub metadata: ReportMetadata,
    /// The groups in the order they appear in the report.
    pub groups: Vec<GroupInfo>,
}

/// A parser of METAR and TAF reports.
///
/// The parser splits the report into groups, classifies them and collects the
/// report's metadata. It never fails but reports errors in the metadata and
/// returns the groups parsed until then.
///
/// Any function or closure taking the report returning a [`ParseResult`] is a
/// parser:
///
/// ```
/// use metar::{ParseResult, ReportError, ReportMetadata, ReportParser};
///
/// let parser = |report: &str| ParseResult {
///     metadata: ReportMetadata {
///         error: if report.is_empty() {
///             ReportError::EmptyReport
///         } else {
///             ReportError::None
///         },
///         ..Default::default()
///     },
///     groups: Vec::new(),
/// };
///
/// assert_eq!(parser.parse("").metadata.error, ReportError::EmptyReport);
/// ```
pub trait ReportParser {
    fn parse(&self, report: &str) -> ParseResult;
}

impl<F> ReportParser for F
where
    F: Fn(&str) -> ParseResult,
{
    fn parse(&self, report: &str) -> ParseResult {
        self(report)
    }
}
