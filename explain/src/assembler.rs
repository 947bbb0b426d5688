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

use log::{debug, trace, warn};
use metar::groups::GroupInfo;
use metar::{ReportError, ReportKind, ReportMetadata};

use crate::explanation::{Explanation, GroupExplanation};
use crate::render::render;

/// Assembles the explanation of a report from its metadata and groups.
///
/// Each group is explained in the order it is given. The explanation at
/// index `i` is always the one of the group at index `i`.
pub fn assemble(metadata: &ReportMetadata, groups: &[GroupInfo]) -> Explanation {
    debug!(
        "assembling {:?} report of {:?}: {} group(s)",
        metadata.kind,
        metadata.location,
        groups.len()
    );

    match metadata.error {
        ReportError::None => (),
        ReportError::Other(code) => warn!("report has unrecognized error code {code}"),
        error => warn!("report has error {:?}", error),
    }

    let groups: Vec<GroupExplanation> = groups
        .iter()
        .enumerate()
        .map(|(i, info)| {
            let explanation = render(&info.group, info.report_part, &info.raw);
            trace!("group {i} {:?}: {:?}", info.raw, explanation);

            GroupExplanation {
                raw_group: info.raw.clone(),
                explanation,
            }
        })
        .collect();

    debug!("assembled {} explanation(s)", groups.len());

    Explanation {
        report_type: report_type(metadata.kind).to_string(),
        error: error_message(metadata.error).to_string(),
        location: metadata.location.clone(),
        timestamp: metadata
            .time
            .map(|time| time.to_string())
            .unwrap_or_default(),
        is_speci: metadata.is_speci,
        is_automated: metadata.is_automated,
        is_nil: metadata.is_nil,
        is_cancelled: metadata.is_cancelled,
        is_amended: metadata.is_amended,
        is_correctional: metadata.is_correctional,
        groups,
    }
}

fn report_type(kind: ReportKind) -> &'static str {
    match kind {
        ReportKind::Metar => "METAR",
        ReportKind::Taf => "TAF",
        ReportKind::Unknown => "UNKNOWN",
    }
}

/// Returns the message of a parser error or an empty string if there is none.
pub fn error_message(error: ReportError) -> &'static str {
    match error {
        ReportError::None => "",
        ReportError::EmptyReport => "Empty report",
        ReportError::ExpectedReportTypeOrLocation => "Expected report type or location",
        ReportError::ExpectedLocation => "Expected location",
        ReportError::ExpectedReportTime => "Expected report time",
        ReportError::ExpectedTimeSpan => "Expected time span",
        ReportError::UnexpectedReportEnd => "Unexpected report end",
        ReportError::UnexpectedGroupAfterNil
        | ReportError::UnexpectedGroupAfterCnl
        | ReportError::UnexpectedNilOrCnlInReportBody
        | ReportError::AmdAllowedInTafOnly
        | ReportError::CnlAllowedInTafOnly
        | ReportError::MaintenanceIndicatorAllowedInMetarOnly
        | ReportError::ReportTooLarge
        | ReportError::Other(_) => "Parsing error",
    }
}

#[cfg(test)]
mod tests {
    use metar::groups::{Group, Keyword, ReportPart, ReportTime};

    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(error_message(ReportError::None), "");
        assert_eq!(error_message(ReportError::EmptyReport), "Empty report");
        assert_eq!(
            error_message(ReportError::ExpectedReportTypeOrLocation),
            "Expected report type or location"
        );
        assert_eq!(error_message(ReportError::ExpectedLocation), "Expected location");
        assert_eq!(
            error_message(ReportError::ExpectedReportTime),
            "Expected report time"
        );
        assert_eq!(error_message(ReportError::ExpectedTimeSpan), "Expected time span");
        assert_eq!(
            error_message(ReportError::UnexpectedReportEnd),
            "Unexpected report end"
        );
        assert_eq!(error_message(ReportError::ReportTooLarge), "Parsing error");
        assert_eq!(error_message(ReportError::from_code(4711)), "Parsing error");
    }

    #[test]
    fn copies_metadata() {
        let metadata = ReportMetadata {
            kind: ReportKind::Taf,
            error: ReportError::None,
            location: "EDDH".to_string(),
            time: Some(ReportTime::new(Some(1), 5, 0).unwrap()),
            is_amended: true,
            is_correctional: true,
            ..Default::default()
        };

        let explanation = assemble(&metadata, &[]);

        assert_eq!(explanation.report_type, "TAF");
        assert_eq!(explanation.error, "");
        assert!(!explanation.has_error());
        assert_eq!(explanation.location, "EDDH");
        assert_eq!(explanation.timestamp, "day 1, 05:00 UTC");
        assert!(explanation.is_amended && explanation.is_correctional);
        assert!(!explanation.is_speci && !explanation.is_nil);
        assert!(explanation.groups.is_empty());
    }

    #[test]
    fn missing_time_is_empty() {
        let metadata = ReportMetadata {
            error: ReportError::ExpectedReportTime,
            ..Default::default()
        };

        let explanation = assemble(&metadata, &[]);

        assert_eq!(explanation.report_type, "UNKNOWN");
        assert_eq!(explanation.timestamp, "");
        assert_eq!(explanation.error, "Expected report time");
    }

    #[test]
    fn keeps_group_order() {
        let groups = [
            GroupInfo::new(Group::Keyword(Keyword::Rmk), ReportPart::Metar, "RMK"),
            GroupInfo::new(Group::Keyword(Keyword::Ao2), ReportPart::Rmk, "AO2"),
            GroupInfo::new(Group::Unknown, ReportPart::Rmk, "FOO"),
        ];

        let explanation = assemble(&ReportMetadata::default(), &groups);

        let raw: Vec<&str> = explanation
            .groups
            .iter()
            .map(|g| g.raw_group.as_str())
            .collect();
        assert_eq!(raw, ["RMK", "AO2", "FOO"]);
        assert_eq!(
            explanation.explanations().collect::<Vec<_>>(),
            [
                "The remarks are as follows",
                "Automated station with precipitation discriminator",
                "Unknown group: FOO",
            ]
        );
    }
}
