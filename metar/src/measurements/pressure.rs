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

use super::{constants, Measurement, UnitOfMeasure};

/// Pressure unit with _Pa_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PressureUnit {
    Hectopascal,
    InchesHg,
    MillimetersHg,
}

impl UnitOfMeasure for PressureUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Hectopascal => "hPa",
            Self::InchesHg => "inHg",
            Self::MillimetersHg => "mmHg",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Hectopascal => "hectopascal",
            Self::InchesHg => "inches of mercury",
            Self::MillimetersHg => "millimeters of mercury",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Hectopascal => value / constants::HECTOPASCAL_IN_PASCAL,
            Self::InchesHg => value / constants::INCH_HG_IN_PASCAL,
            Self::MillimetersHg => value / constants::MILLIMETER_HG_IN_PASCAL,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Hectopascal => value * constants::HECTOPASCAL_IN_PASCAL,
            Self::InchesHg => value * constants::INCH_HG_IN_PASCAL,
            Self::MillimetersHg => value * constants::MILLIMETER_HG_IN_PASCAL,
        }
    }
}

/// Atmospheric pressure, e.g. the QNH.
pub type Pressure = Measurement<PressureUnit>;

impl Pressure {
    pub fn h_pa(value: f32) -> Self {
        Self::new(value, PressureUnit::Hectopascal)
    }

    pub fn in_hg(value: f32) -> Self {
        Self::new(value, PressureUnit::InchesHg)
    }

    pub fn mm_hg(value: f32) -> Self {
        Self::new(value, PressureUnit::MillimetersHg)
    }
}
