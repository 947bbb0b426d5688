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

use chrono::{NaiveTime, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Time of a report in UTC.
///
/// Reports state the day of month and the time, e.g. `091953Z`, but some
/// groups omit the day.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ReportTime {
    day: Option<u8>,
    time: NaiveTime,
}

impl ReportTime {
    /// Creates a new report time.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidReportTime`] if the day is not within 1 to 31 or the
    /// hour and minute are not a time of the day.
    ///
    /// [`InvalidReportTime`]: Error::InvalidReportTime
    pub fn new(day: Option<u8>, hour: u8, minute: u8) -> Result<Self, Error> {
        let valid_day = day.map_or(true, |day| (1..=31).contains(&day));

        match NaiveTime::from_hms_opt(hour.into(), minute.into(), 0) {
            Some(time) if valid_day => Ok(Self { day, time }),
            _ => Err(Error::InvalidReportTime { day, hour, minute }),
        }
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.time.hour() as u8
    }

    pub fn minute(&self) -> u8 {
        self.time.minute() as u8
    }
}

impl fmt::Display for ReportTime {
    /// Formats the time as e.g. `day 9, 19:53 UTC`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(day) = self.day {
            write!(f, "day {day}, ")?;
        }

        write!(f, "{} UTC", self.time.format("%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_zero_padded_time() {
        let time = ReportTime::new(Some(9), 7, 5).expect("time should be valid");
        assert_eq!(time.to_string(), "day 9, 07:05 UTC");

        let time = ReportTime::new(None, 19, 53).expect("time should be valid");
        assert_eq!(time.to_string(), "19:53 UTC");
        assert_eq!((time.hour(), time.minute()), (19, 53));
    }

    #[test]
    fn rejects_invalid_time() {
        assert_eq!(
            ReportTime::new(Some(32), 12, 0),
            Err(Error::InvalidReportTime {
                day: Some(32),
                hour: 12,
                minute: 0
            })
        );
        assert!(ReportTime::new(None, 24, 0).is_err());
        assert!(ReportTime::new(Some(1), 23, 60).is_err());
    }
}
