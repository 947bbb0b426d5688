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

use metar::groups::{Runway, RunwayDesignator, VisibilityGroup, VisibilityTrend};
use metar::measurements::{Distance, DistanceUnit};

use super::phrase::{self, hundredths, whole, NOT_REPORTED};

pub(super) fn render(group: &VisibilityGroup) -> String {
    match group {
        VisibilityGroup::Prevailing(d) => observed("Visibility: ", d),
        VisibilityGroup::Tower(d) => observed("Visibility from air traffic control tower is ", d),
        VisibilityGroup::Surface(d) => observed("Surface visibility is ", d),
        VisibilityGroup::Runway(d) => observed("Runway visibility is ", d),

        VisibilityGroup::Rvr {
            runway,
            visibility,
            trend,
        } => {
            let mut s = rvr_lead(runway);
            s.push_str("is ");
            s.push_str(&phrase::distance(visibility));

            if !visibility.is_reported() {
                return s;
            }

            let conversions = conversions(visibility);
            if !conversions.is_empty() {
                s.push_str(&format!(" ({conversions})"));
            }

            s.push_str(rvr_trend(trend));
            s
        }

        VisibilityGroup::VariableRvr {
            runway,
            min,
            max,
            trend,
        } => {
            let mut s = rvr_lead(runway);
            s.push_str(&format!(
                "is variable from {} to {}",
                phrase::distance(min),
                phrase::distance(max)
            ));

            match (conversions(min), conversions(max)) {
                (lower, upper) if lower.is_empty() && upper.is_empty() => (),
                (lower, upper) => s.push_str(&format!(
                    " ({} to {})",
                    or_not_reported(lower),
                    or_not_reported(upper)
                )),
            }

            s.push_str(rvr_trend(trend));
            s
        }
    }
}

/// Visibility followed by meters and feet if reported in statute miles.
fn observed(lead: &str, d: &Distance) -> String {
    let mut s = format!("{lead}{}", phrase::distance(d));

    if d.unit() == DistanceUnit::StatuteMiles {
        if let Some(meters) = d.convert_to(DistanceUnit::Meters) {
            s.push_str(&format!(" ({} meters", whole(meters)));

            if let Some(feet) = d.convert_to(DistanceUnit::Feet) {
                s.push_str(&format!(" / {} feet", whole(feet)));
            }

            s.push(')');
        }
    }

    s
}

fn rvr_lead(runway: &Option<Runway>) -> String {
    let Some(runway) = runway else {
        return "Runway visual range ".to_string();
    };

    let designator = match runway.designator() {
        Some(RunwayDesignator::Left) => " Left",
        Some(RunwayDesignator::Right) => " Right",
        Some(RunwayDesignator::Center) => " Center",
        None => "",
    };

    format!(
        "Runway visual range for runway {}{designator} ",
        runway.number()
    )
}

/// Returns the distance in meters and statute miles, skipping the reported unit.
fn conversions(d: &Distance) -> String {
    let mut units = Vec::with_capacity(2);

    if d.unit() != DistanceUnit::Meters {
        if let Some(meters) = d.convert_to(DistanceUnit::Meters) {
            units.push(format!("{} meters", whole(meters)));
        }
    }

    if d.unit() != DistanceUnit::StatuteMiles {
        if let Some(miles) = d.convert_to(DistanceUnit::StatuteMiles) {
            units.push(format!("{} statute miles", hundredths(miles)));
        }
    }

    units.join(" / ")
}

fn or_not_reported(s: String) -> String {
    if s.is_empty() {
        NOT_REPORTED.to_string()
    } else {
        s
    }
}

fn rvr_trend(trend: &Option<VisibilityTrend>) -> &'static str {
    match trend {
        Some(VisibilityTrend::Upward) => ", with increasing trend",
        Some(VisibilityTrend::Downward) => ", with decreasing trend",
        Some(VisibilityTrend::Neutral) => ", with no change trend",
        Some(VisibilityTrend::NotReported) | None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prevailing_in_statute_miles() {
        let vis = VisibilityGroup::Prevailing(Distance::sm(2.0));
        assert_eq!(
            render(&vis),
            "Visibility: 2 statute miles (3219 meters / 10560 feet)"
        );
    }

    #[test]
    fn prevailing_in_meters_has_no_conversion() {
        let vis = VisibilityGroup::Prevailing(Distance::m(9999.0));
        assert_eq!(render(&vis), "Visibility: 9999 meters");
    }

    #[test]
    fn bounded_visibility() {
        let vis = VisibilityGroup::Prevailing(Distance::sm(10.0).more_than());
        assert_eq!(
            render(&vis),
            "Visibility: more than 10 statute miles (16093 meters / 52800 feet)"
        );

        let vis = VisibilityGroup::Surface(Distance::sm(0.25).less_than());
        assert_eq!(
            render(&vis),
            "Surface visibility is less than 0.25 statute miles (402 meters / 1320 feet)"
        );
    }

    #[test]
    fn lead_in_per_kind() {
        let d = Distance::m(800.0);
        assert_eq!(
            render(&VisibilityGroup::Tower(d)),
            "Visibility from air traffic control tower is 800 meters"
        );
        assert_eq!(
            render(&VisibilityGroup::Runway(d)),
            "Runway visibility is 800 meters"
        );
    }

    #[test]
    fn visibility_not_reported() {
        let vis = VisibilityGroup::Prevailing(Distance::not_reported(DistanceUnit::StatuteMiles));
        assert_eq!(render(&vis), "Visibility: not reported");

        let vis = VisibilityGroup::Rvr {
            runway: Some(Runway::new(6, None).unwrap()),
            visibility: Distance::not_reported(DistanceUnit::Meters),
            trend: Some(VisibilityTrend::Upward),
        };
        assert_eq!(render(&vis), "Runway visual range for runway 6 is not reported");
    }

    #[test]
    fn rvr_with_runway_and_trend() {
        let vis = VisibilityGroup::Rvr {
            runway: Some(Runway::new(24, Some(RunwayDesignator::Left)).unwrap()),
            visibility: Distance::m(600.0),
            trend: Some(VisibilityTrend::Upward),
        };
        assert_eq!(
            render(&vis),
            "Runway visual range for runway 24 Left is 600 meters (0.37 statute miles), with increasing trend"
        );
    }

    #[test]
    fn rvr_in_feet_shows_meters_and_miles() {
        let vis = VisibilityGroup::Rvr {
            runway: None,
            visibility: Distance::ft(6000.0).more_than(),
            trend: Some(VisibilityTrend::NotReported),
        };
        assert_eq!(
            render(&vis),
            "Runway visual range is more than 6000 feet (1829 meters / 1.14 statute miles)"
        );
    }

    #[test]
    fn variable_rvr_bounds_have_own_modifier() {
        let vis = VisibilityGroup::VariableRvr {
            runway: Some(Runway::new(9, Some(RunwayDesignator::Center)).unwrap()),
            min: Distance::m(50.0).less_than(),
            max: Distance::m(1200.0).more_than(),
            trend: Some(VisibilityTrend::Neutral),
        };
        assert_eq!(
            render(&vis),
            "Runway visual range for runway 9 Center is variable from less than 50 meters to \
             more than 1200 meters (0.03 statute miles to 0.75 statute miles), with no change trend"
        );
    }

    #[test]
    fn variable_rvr_in_feet() {
        let vis = VisibilityGroup::VariableRvr {
            runway: None,
            min: Distance::ft(600.0),
            max: Distance::ft(1200.0),
            trend: None,
        };
        assert_eq!(
            render(&vis),
            "Runway visual range is variable from 600 feet to 1200 feet \
             (183 meters / 0.11 statute miles to 366 meters / 0.23 statute miles)"
        );
    }

    #[test]
    fn variable_rvr_with_missing_bound() {
        let vis = VisibilityGroup::VariableRvr {
            runway: None,
            min: Distance::not_reported(DistanceUnit::Meters),
            max: Distance::m(1200.0),
            trend: Some(VisibilityTrend::Downward),
        };
        assert_eq!(
            render(&vis),
            "Runway visual range is variable from not reported to 1200 meters \
             (not reported to 0.75 statute miles), with decreasing trend"
        );
    }
}
