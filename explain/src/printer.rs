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

use std::fmt;

use crate::explanation::Explanation;

/// Narrowest column of the raw groups.
const MIN_GROUP_WIDTH: usize = 15;

/// Prints the explanation as plain text with the raw groups in the left and
/// their explanation in the right column.
impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report Type: {}", self.report_type)?;

        if !self.error.is_empty() {
            writeln!(f, "Parsing Issue: {}", self.error)?;
        }

        if !self.location.is_empty() {
            writeln!(f, "Location:    {}", self.location)?;
        }

        if !self.timestamp.is_empty() {
            writeln!(f, "Timestamp:   {}", self.timestamp)?;
        }

        let flags = [
            (self.is_speci, "Is SPECI:    "),
            (self.is_automated, "Is Automated:"),
            (self.is_nil, "Is NIL:      "),
            (self.is_cancelled, "Is Cancelled:"),
            (self.is_amended, "Is Amended:  "),
            (self.is_correctional, "Is Correctnl:"),
        ];

        for (_, label) in flags.iter().filter(|(set, _)| *set) {
            writeln!(f, "{label}true")?;
        }

        writeln!(f)?;
        writeln!(f, "--- Groups ---")?;

        let width = self
            .groups
            .iter()
            .map(|g| g.raw_group.chars().count())
            .fold(MIN_GROUP_WIDTH, usize::max);

        for group in &self.groups {
            let mut lines = group.explanation.split('\n');
            let first = lines.next().unwrap_or_default();
            writeln!(f, "{:<width$}  {first}", group.raw_group)?;

            for line in lines {
                writeln!(f, "{:indent$}{line}", "", indent = width + 2)?;
            }
        }

        Ok(())
    }
}
