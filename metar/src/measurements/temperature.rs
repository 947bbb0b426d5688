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

/// Temperature unit with _K_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
}

impl UnitOfMeasure for TemperatureUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Celsius => "degrees Celsius",
            Self::Fahrenheit => "degrees Fahrenheit",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        let celsius = value - constants::KELVIN_IN_CELSIUS;

        match to {
            Self::Celsius => celsius,
            Self::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        let celsius = match self {
            Self::Celsius => *value,
            Self::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        };

        celsius + constants::KELVIN_IN_CELSIUS
    }
}

/// Air or dew point temperature.
pub type Temperature = Measurement<TemperatureUnit>;

impl Temperature {
    pub fn c(value: f32) -> Self {
        Self::new(value, TemperatureUnit::Celsius)
    }

    pub fn f(value: f32) -> Self {
        Self::new(value, TemperatureUnit::Fahrenheit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn celsius_to_fahrenheit() {
        let f = |c: f32| Temperature::c(c).convert_to(TemperatureUnit::Fahrenheit);
        assert_eq!(f(20.0).map(f32::round), Some(68.0));
        assert_eq!(f(15.0).map(f32::round), Some(59.0));
        assert_eq!(f(-40.0).map(f32::round), Some(-40.0));
    }

    #[test]
    fn fahrenheit_to_celsius() {
        let c = Temperature::f(212.0).convert_to(TemperatureUnit::Celsius);
        assert_eq!(c.map(f32::round), Some(100.0));
    }
}
