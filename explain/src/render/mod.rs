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

//! Plain English explanation of single groups.
//!
//! Each [`Group`] kind has its own rules how its values are phrased. Values
//! are stated in the unit they were reported in. Visibilities in statute
//! miles, temperatures and pressures in inches of mercury are followed by
//! their value in other units. Values that are not reported are explained as
//! such, e.g. `Pressure: not reported`.
//!
//! Groups that are classified but not decoded, like a runway state, are
//! explained by a label followed by their raw text.

use log::trace;
use metar::groups::{Group, Keyword, ReportPart};

mod atmosphere;
mod cloud;
mod phrase;
mod visibility;
mod weather;
mod wind;

/// Explains the `group` found in the `report_part`.
///
/// The `raw` text of the group is used by groups that are not decoded into
/// values. The rendering never fails.
///
/// # Examples
///
/// ```
/// use metar::groups::{Group, ReportPart, VisibilityGroup};
/// use metar::measurements::Distance;
/// use metar_explain::render::render;
///
/// let vis = Group::Visibility(VisibilityGroup::Prevailing(Distance::sm(2.0)));
/// assert_eq!(
///     render(&vis, ReportPart::Metar, "2SM"),
///     "Visibility: 2 statute miles (3219 meters / 10560 feet)"
/// );
/// ```
pub fn render(group: &Group, report_part: ReportPart, raw: &str) -> String {
    trace!("rendering {:?} group {:?}", report_part, raw);

    match group {
        Group::Keyword(keyword) => render_keyword(keyword, raw),
        Group::Location(location) => format!("ICAO airport code: {location}"),
        Group::ReportTime(time) => format!("Report time: {time}"),
        Group::Wind(wind) => wind::render(wind),
        Group::Visibility(visibility) => visibility::render(visibility),
        Group::Cloud(cloud) => cloud::render(cloud, raw),
        Group::Temperature(temperature) => atmosphere::render_temperature(temperature),
        Group::Pressure(pressure) => atmosphere::render_pressure(pressure),
        Group::Weather(weather) => weather::render(weather),
        Group::CloudTypes(cloud_types) => cloud::render_types(cloud_types),
        Group::Trend => format!("Trend information: {raw}"),
        Group::RunwayState => format!("Runway state: {raw}"),
        Group::SeaSurface => format!("Sea surface conditions: {raw}"),
        Group::MinMaxTemperature => format!("Min/Max temperature: {raw}"),
        Group::Precipitation => format!("Precipitation information: {raw}"),
        Group::LayerForecast => format!("Layer forecast: {raw}"),
        Group::PressureTendency => format!("Pressure tendency: {raw}"),
        Group::LowMidHighCloud => format!("Low/Mid/High clouds: {raw}"),
        Group::Lightning => format!("Lightning: {raw}"),
        Group::Vicinity => format!("Vicinity observations: {raw}"),
        Group::Misc => format!("Additional information: {raw}"),
        Group::Unknown => format!("Unknown group: {raw}"),
    }
}

fn render_keyword(keyword: &Keyword, raw: &str) -> String {
    let sentence = match keyword {
        Keyword::Metar => "Report type: METAR (weather observation report)",
        Keyword::Speci => "Unscheduled METAR (weather observation report)",
        Keyword::Taf => "Report type: TAF (terminal aerodrome forecast)",
        Keyword::Auto => "Fully automated report with no human intervention",
        Keyword::Cavok => "Ceiling and visibility OK (visibility >10km, no clouds below 5000ft)",
        Keyword::Rmk => "The remarks are as follows",
        Keyword::Ao1 => "Automated station without precipitation discriminator",
        Keyword::Ao2 => "Automated station with precipitation discriminator",
        Keyword::Ao1a
        | Keyword::Ao2a
        | Keyword::Cor
        | Keyword::Amd
        | Keyword::Nil
        | Keyword::Cnl
        | Keyword::Nospeci
        | Keyword::MaintenanceIndicator => return format!("Keyword group: {raw}"),
    };

    sentence.to_string()
}
