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

//! Measurements reported in METAR and TAF groups.
//!
//! A report states each value in the unit the reporting station uses, e.g.
//! wind in knots or in meter per second and visibility in meters or statute
//! miles. A [`Measurement`] keeps the value together with its unit and converts
//! it to any other unit of the same quantity. Its value is optional since
//! reports mark values as not reported, e.g. a wind of `/////KT`.
//!
//! ```
//! use metar::measurements::{DistanceUnit, Length};
//!
//! let visibility = Length::sm(2.0);
//! let meters = visibility.convert_to(DistanceUnit::Meters);
//! assert_eq!(meters.map(f32::round), Some(3219.0));
//!
//! let missing = Length::not_reported(DistanceUnit::StatuteMiles);
//! assert_eq!(missing.convert_to(DistanceUnit::Meters), None);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod constants;
mod distance;
mod pressure;
mod speed;
mod temperature;

pub use distance::{Distance, DistanceModifier, DistanceUnit, Length};
pub use pressure::{Pressure, PressureUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};

/// A unit in which a quantity is measured.
///
/// Each unit converts from and to the SI unit of its quantity, which allows
/// to convert between any two units of the same quantity.
pub trait UnitOfMeasure: Copy + PartialEq {
    /// The unit's symbol, e.g. `hPa`.
    fn symbol(&self) -> &'static str;

    /// The unit's name as used in plain text, e.g. `statute miles`.
    fn name(&self) -> &'static str;

    /// Converts the `value` given in SI unit to the unit `to`.
    fn from_si(value: f32, to: &Self) -> f32;

    /// Converts the `value` given in this unit to the SI unit.
    fn to_si(&self, value: &f32) -> f32;
}

/// Converts a `value` measured in unit `from` to the unit `to`.
///
/// A value that is absent stays absent, and a value converted to its own
/// unit is returned unchanged.
pub fn convert<U: UnitOfMeasure>(value: Option<f32>, from: U, to: U) -> Option<f32> {
    let value = value?;

    if from == to {
        Some(value)
    } else {
        Some(U::from_si(from.to_si(&value), &to))
    }
}

/// A value with a unit that might not be reported.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<U> {
    value: Option<f32>,
    unit: U,
}

impl<U: UnitOfMeasure> Measurement<U> {
    /// Creates a reported measurement.
    pub fn new(value: f32, unit: U) -> Self {
        Self {
            value: Some(value),
            unit,
        }
    }

    /// Creates a measurement that is not reported in the unit used by the report.
    pub fn not_reported(unit: U) -> Self {
        Self { value: None, unit }
    }

    /// Returns the value in the measurement's own unit.
    pub fn value(&self) -> Option<f32> {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// Returns `true` if the measurement has a value.
    pub fn is_reported(&self) -> bool {
        self.value.is_some()
    }

    /// Returns the value in SI unit.
    pub fn to_si(&self) -> Option<f32> {
        self.value.map(|value| self.unit.to_si(&value))
    }

    /// Returns the value converted to the `unit`.
    pub fn convert_to(&self, unit: U) -> Option<f32> {
        convert(self.value, self.unit, unit)
    }
}

impl<U: UnitOfMeasure> fmt::Display for Measurement<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => write!(f, "{value} {}", self.unit.symbol()),
            None => write!(f, "/// {}", self.unit.symbol()),
        }
    }
}
