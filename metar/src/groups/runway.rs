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
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Designator of parallel runways.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunwayDesignator {
    Left,
    Right,
    Center,
}

/// A runway as referenced by runway visual range or runway state groups.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    number: u8,
    designator: Option<RunwayDesignator>,
}

impl Runway {
    /// Creates a runway from its number and designator.
    ///
    /// Besides the numbers 0 to 36, the numbers 88 (all runways) and 99
    /// (repeated runway state) are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRunway`] for any other number.
    ///
    /// [`InvalidRunway`]: Error::InvalidRunway
    pub fn new(number: u8, designator: Option<RunwayDesignator>) -> Result<Self, Error> {
        match number {
            0..=36 | 88 | 99 => Ok(Self { number, designator }),
            _ => Err(Error::InvalidRunway { number }),
        }
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    pub fn designator(&self) -> Option<RunwayDesignator> {
        self.designator
    }
}

impl FromStr for Runway {
    type Err = Error;

    /// Parses a runway like `24L` or `R06` as found in runway visual range groups.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ident = s.strip_prefix('R').unwrap_or(s);

        let number = ident
            .get(0..2)
            .filter(|n| n.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|n| n.parse::<u8>().ok())
            .ok_or_else(|| Error::UnexpectedString(s.to_string()))?;

        let designator = match ident.get(2..) {
            Some("") => None,
            Some("L") => Some(RunwayDesignator::Left),
            Some("R") => Some(RunwayDesignator::Right),
            Some("C") => Some(RunwayDesignator::Center),
            _ => return Err(Error::UnexpectedString(s.to_string())),
        };

        Self::new(number, designator)
    }
}

impl fmt::Display for Runway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.number)?;

        match self.designator {
            Some(RunwayDesignator::Left) => write!(f, "L"),
            Some(RunwayDesignator::Right) => write!(f, "R"),
            Some(RunwayDesignator::Center) => write!(f, "C"),
            None => Ok(()),
        }
    }
}
