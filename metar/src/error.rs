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

use std::error;
use std::fmt;

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Error {
    InvalidReportTime {
        day: Option<u8>,
        hour: u8,
        minute: u8,
    },
    InvalidRunway {
        number: u8,
    },
    InvalidOkta {
        okta: u8,
    },
    UnexpectedString(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReportTime { day, hour, minute } => match day {
                Some(day) => write!(
                    f,
                    "day {day} at {hour:02}:{minute:02} is not a valid report time"
                ),
                None => write!(f, "{hour:02}:{minute:02} is not a valid report time"),
            },
            Self::InvalidRunway { number } => {
                write!(f, "runway should be numbered 0 to 36 (or 88, 99) but is {number}")
            }
            Self::InvalidOkta { okta } => {
                write!(f, "cloud amount should be 0 to 8 okta but is {okta}")
            }
            Self::UnexpectedString(s) => write!(f, "unexpected string \"{s}\""),
        }
    }
}

impl error::Error for Error {}
