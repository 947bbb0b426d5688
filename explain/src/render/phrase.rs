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

//! Phrases shared by the group renderers.
//!
//! Values are printed in the unit they were reported in with their original
//! precision. Values converted to another unit are only shown in parentheses
//! and rounded.

use metar::measurements::{Distance, DistanceModifier, DistanceUnit, Length, Speed, UnitOfMeasure};

pub(super) const NOT_REPORTED: &str = "not reported";

/// Rounds a converted value to a whole number.
pub(super) fn whole(value: f32) -> i64 {
    value.round() as i64
}

/// Rounds a converted value to two decimals.
pub(super) fn hundredths(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Returns e.g. `less than 600 meters` or `not reported`.
pub(super) fn distance(d: &Distance) -> String {
    let Some(value) = d.value() else {
        return NOT_REPORTED.to_string();
    };

    let bound = match d.modifier {
        Some(DistanceModifier::LessThan) => "less than ",
        Some(DistanceModifier::MoreThan) => "more than ",
        None => "",
    };

    format!("{bound}{value} {}", d.unit().name())
}

/// Returns e.g. `10 knots` if the speed is reported.
pub(super) fn speed(s: &Speed) -> Option<String> {
    s.value().map(|value| format!("{value} {}", s.unit().name()))
}

/// Returns e.g. `3000 feet` if the length is reported.
///
/// Lengths reported in another unit are converted to feet.
pub(super) fn feet(length: &Length) -> Option<String> {
    match length.unit() {
        DistanceUnit::Feet => length.value().map(|ft| format!("{ft} feet")),
        _ => length
            .convert_to(DistanceUnit::Feet)
            .map(|ft| format!("{} feet", whole(ft))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(whole(3218.688), 3219);
        assert_eq!(whole(-3.5), -4);
        assert_eq!(whole(26.6), 27);
        assert_eq!(hundredths(0.372_823), 0.37);
    }

    #[test]
    fn distance_with_bound() {
        assert_eq!(distance(&Distance::sm(6.0).more_than()), "more than 6 statute miles");
        assert_eq!(distance(&Distance::m(50.0).less_than()), "less than 50 meters");
        assert_eq!(distance(&Distance::sm(0.25)), "0.25 statute miles");
        assert_eq!(
            distance(&Distance::not_reported(DistanceUnit::Meters).less_than()),
            "not reported"
        );
    }

    #[test]
    fn height_in_feet() {
        assert_eq!(feet(&Length::ft(3000.0)).as_deref(), Some("3000 feet"));
        assert_eq!(feet(&Length::m(300.0)).as_deref(), Some("984 feet"));
        assert_eq!(feet(&Length::not_reported(DistanceUnit::Feet)), None);
    }
}
