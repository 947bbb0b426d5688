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

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// A group that consists of a fixed keyword.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Keyword {
    Metar,
    Speci,
    Taf,
    Auto,
    Cavok,
    Rmk,
    /// Automated station without precipitation discriminator.
    Ao1,
    /// Automated station with precipitation discriminator.
    Ao2,
    Ao1a,
    Ao2a,
    Cor,
    Amd,
    Nil,
    Cnl,
    Nospeci,
    /// The `$` sign indicating that the station needs maintenance.
    MaintenanceIndicator,
}

impl FromStr for Keyword {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "METAR" => Ok(Self::Metar),
            "SPECI" => Ok(Self::Speci),
            "TAF" => Ok(Self::Taf),
            "AUTO" => Ok(Self::Auto),
            "CAVOK" => Ok(Self::Cavok),
            "RMK" => Ok(Self::Rmk),
            "AO1" => Ok(Self::Ao1),
            "AO2" => Ok(Self::Ao2),
            "AO1A" => Ok(Self::Ao1a),
            "AO2A" => Ok(Self::Ao2a),
            "COR" => Ok(Self::Cor),
            "AMD" => Ok(Self::Amd),
            "NIL" => Ok(Self::Nil),
            "CNL" => Ok(Self::Cnl),
            "NOSPECI" => Ok(Self::Nospeci),
            "$" => Ok(Self::MaintenanceIndicator),
            _ => Err(Error::UnexpectedString(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_from_str() {
        assert_eq!("CAVOK".parse::<Keyword>(), Ok(Keyword::Cavok));
        assert_eq!("$".parse::<Keyword>(), Ok(Keyword::MaintenanceIndicator));
        assert_eq!(
            "cavok".parse::<Keyword>(),
            Err(Error::UnexpectedString("cavok".to_string()))
        );
    }
}
