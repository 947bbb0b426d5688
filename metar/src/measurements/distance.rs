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

/// Distance unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    Meters,
    StatuteMiles,
    Feet,
}

impl UnitOfMeasure for DistanceUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::StatuteMiles => "SM",
            Self::Feet => "ft",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::StatuteMiles => "statute miles",
            Self::Feet => "feet",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Meters => value,
            Self::StatuteMiles => value / constants::STATUTE_MILE_IN_METER,
            Self::Feet => value / constants::FEET_IN_METER,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Meters => *value,
            Self::StatuteMiles => value * constants::STATUTE_MILE_IN_METER,
            Self::Feet => value * constants::FEET_IN_METER,
        }
    }
}

/// Length such as a cloud base or a vertical visibility.
pub type Length = Measurement<DistanceUnit>;

impl Length {
    pub fn m(value: f32) -> Self {
        Self::new(value, DistanceUnit::Meters)
    }

    pub fn sm(value: f32) -> Self {
        Self::new(value, DistanceUnit::StatuteMiles)
    }

    pub fn ft(value: f32) -> Self {
        Self::new(value, DistanceUnit::Feet)
    }
}

/// Bounds a reported distance from one side, e.g. `P6SM` or `M1/4SM`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceModifier {
    LessThan,
    MoreThan,
}

/// A visibility distance.
///
/// The distance is a [`Length`] that might be stated as a bound, e.g. a
/// visibility of more than 6 statute miles (`P6SM`) or a runway visual range
/// of less than 50 meters (`R24/M0050`).
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Distance {
    pub length: Length,
    pub modifier: Option<DistanceModifier>,
}

impl Distance {
    pub fn m(value: f32) -> Self {
        Length::m(value).into()
    }

    pub fn sm(value: f32) -> Self {
        Length::sm(value).into()
    }

    pub fn ft(value: f32) -> Self {
        Length::ft(value).into()
    }

    pub fn not_reported(unit: DistanceUnit) -> Self {
        Length::not_reported(unit).into()
    }

    /// Turns the distance into a lower bound.
    pub fn more_than(self) -> Self {
        Self {
            modifier: Some(DistanceModifier::MoreThan),
            ..self
        }
    }

    /// Turns the distance into an upper bound.
    pub fn less_than(self) -> Self {
        Self {
            modifier: Some(DistanceModifier::LessThan),
            ..self
        }
    }

    pub fn value(&self) -> Option<f32> {
        self.length.value()
    }

    pub fn unit(&self) -> DistanceUnit {
        self.length.unit()
    }

    pub fn is_reported(&self) -> bool {
        self.length.is_reported()
    }

    pub fn convert_to(&self, unit: DistanceUnit) -> Option<f32> {
        self.length.convert_to(unit)
    }
}

impl From<Length> for Distance {
    fn from(length: Length) -> Self {
        Self {
            length,
            modifier: None,
        }
    }
}
