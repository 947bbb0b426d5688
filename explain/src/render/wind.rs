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

use metar::groups::{Direction, WindGroup};

use super::phrase::{self, NOT_REPORTED};

pub(super) fn render(wind: &WindGroup) -> String {
    if wind.calm {
        return "Wind: Calm".to_string();
    }

    let mut clauses = Vec::with_capacity(2);

    match wind.direction {
        Direction::Degrees(degrees) => clauses.push(format!("from {degrees} degrees")),
        Direction::Variable => clauses.push("variable direction".to_string()),
        Direction::NoDirectionalVariation | Direction::NotReported => (),
    }

    if let Some(speed) = phrase::speed(&wind.speed) {
        clauses.push(format!("at {speed}"));
    }

    let mut s = format!("Wind: {}", clauses.join(" "));

    match (phrase::speed(&wind.gust), clauses.is_empty()) {
        (Some(gust), false) => s.push_str(&format!(", gusting to {gust}")),
        (Some(gust), true) => s.push_str(&format!("gusting to {gust}")),
        (None, true) => s.push_str(NOT_REPORTED),
        (None, false) => (),
    }

    s
}

#[cfg(test)]
mod tests {
    use metar::measurements::{Speed, SpeedUnit};

    use super::*;

    fn wind(direction: Direction, speed: Speed, gust: Speed) -> WindGroup {
        WindGroup {
            direction,
            speed,
            gust,
            calm: false,
        }
    }

    #[test]
    fn calm_has_no_clauses() {
        assert_eq!(render(&WindGroup::calm()), "Wind: Calm");
    }

    #[test]
    fn direction_speed_and_gust() {
        let w = wind(Direction::Degrees(270), Speed::kt(10.0), Speed::kt(18.0));
        assert_eq!(
            render(&w),
            "Wind: from 270 degrees at 10 knots, gusting to 18 knots"
        );
    }

    #[test]
    fn speed_keeps_reported_unit() {
        let no_gust = Speed::not_reported(SpeedUnit::MetersPerSecond);
        let w = wind(Direction::Variable, Speed::mps(3.0), no_gust);
        assert_eq!(render(&w), "Wind: variable direction at 3 m/s");

        let w = wind(Direction::Degrees(90), Speed::kph(20.0), Speed::kph(35.0));
        assert_eq!(
            render(&w),
            "Wind: from 90 degrees at 20 km/h, gusting to 35 km/h"
        );
    }

    #[test]
    fn missing_direction_is_omitted() {
        let w = wind(
            Direction::NotReported,
            Speed::mph(12.0),
            Speed::not_reported(SpeedUnit::MilesPerHour),
        );
        assert_eq!(render(&w), "Wind: at 12 mph");
    }

    #[test]
    fn nothing_reported() {
        let w = wind(
            Direction::NotReported,
            Speed::not_reported(SpeedUnit::Knots),
            Speed::not_reported(SpeedUnit::Knots),
        );
        assert_eq!(render(&w), "Wind: not reported");
        assert!(!render(&w).contains("knots"));

        let w = wind(
            Direction::NotReported,
            Speed::not_reported(SpeedUnit::Knots),
            Speed::kt(25.0),
        );
        assert_eq!(render(&w), "Wind: gusting to 25 knots");
    }
}
