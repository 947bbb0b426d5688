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

/// Speed unit with _m/s_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    Knots,
    MetersPerSecond,
    KilometersPerHour,
    MilesPerHour,
}

impl UnitOfMeasure for SpeedUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Knots => "kt",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Knots => "knots",
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::MilesPerHour => "mph",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::MetersPerSecond => value,
            Self::Knots => value * constants::METER_PER_SECONDS_IN_KNOTS,
            Self::KilometersPerHour => value * constants::KILOMETER_PER_HOUR_IN_METER_PER_SECONDS,
            Self::MilesPerHour => value / constants::MILE_PER_HOUR_IN_METER_PER_SECONDS,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::MetersPerSecond => *value,
            Self::Knots => value / constants::METER_PER_SECONDS_IN_KNOTS,
            Self::KilometersPerHour => value / constants::KILOMETER_PER_HOUR_IN_METER_PER_SECONDS,
            Self::MilesPerHour => value * constants::MILE_PER_HOUR_IN_METER_PER_SECONDS,
        }
    }
}

/// Wind or gust speed.
pub type Speed = Measurement<SpeedUnit>;

impl Speed {
    pub fn kt(value: f32) -> Self {
        Self::new(value, SpeedUnit::Knots)
    }

    pub fn mps(value: f32) -> Self {
        Self::new(value, SpeedUnit::MetersPerSecond)
    }

    pub fn kph(value: f32) -> Self {
        Self::new(value, SpeedUnit::KilometersPerHour)
    }

    pub fn mph(value: f32) -> Self {
        Self::new(value, SpeedUnit::MilesPerHour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knots_to_meter_per_seconds() {
        let v = Speed::kt(10.0).convert_to(SpeedUnit::MetersPerSecond);
        assert!(v.is_some_and(|v| (v - 5.144).abs() < 0.001));
    }

    #[test]
    fn kilometers_per_hour_to_miles_per_hour() {
        let v = Speed::kph(100.0).convert_to(SpeedUnit::MilesPerHour);
        assert!(v.is_some_and(|v| (v - 62.137).abs() < 0.01));
    }
}
