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

//! Classified report groups.
//!
//! A METAR or TAF is a space separated list of groups like `27010G18KT` or
//! `BKN030CB`. A parser classifies each group as one [`Group`] kind and
//! decodes the kind's values. Groups that are only classified but not decoded
//! further, like a runway state or a sea surface group, carry no values. Their
//! raw text is kept in the [`GroupInfo`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::Pressure;

mod cloud;
mod keyword;
mod runway;
mod temperature;
mod time;
mod visibility;
mod weather;
mod wind;

pub use cloud::{ClearSky, CloudAmount, CloudGroup, CloudKind, CloudType, ConvectiveType};
pub use keyword::Keyword;
pub use runway::{Runway, RunwayDesignator};
pub use temperature::TemperatureGroup;
pub use time::ReportTime;
pub use visibility::{VisibilityGroup, VisibilityTrend};
pub use weather::{Descriptor, Phenomenon, Qualifier, WeatherGroup, WeatherPhenomena};
pub use wind::{Direction, WindGroup};

/// A classified report group.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Group {
    /// A fixed keyword like `METAR`, `CAVOK` or `RMK`.
    Keyword(Keyword),
    /// The ICAO location indicator of the reporting station.
    Location(String),
    /// The time the report was issued.
    ReportTime(ReportTime),
    Wind(WindGroup),
    Visibility(VisibilityGroup),
    Cloud(CloudGroup),
    Temperature(TemperatureGroup),
    /// Atmospheric pressure, e.g. `Q1013` or `A2992`.
    Pressure(Pressure),
    Weather(WeatherGroup),
    /// Obscurations and cloud layers by type, e.g. `SC3CI2` in a remark.
    CloudTypes(Vec<CloudType>),
    Trend,
    RunwayState,
    SeaSurface,
    MinMaxTemperature,
    Precipitation,
    LayerForecast,
    PressureTendency,
    LowMidHighCloud,
    Lightning,
    Vicinity,
    Misc,
    /// A group the parser could not classify.
    Unknown,
}

/// The part of a report in which a group was found.
///
/// The same group may mean different things depending on where it appears,
/// e.g. a `9999` is a prevailing visibility in the METAR body but something
/// else in the remarks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ReportPart {
    #[default]
    Unknown,
    /// Report type, location and time.
    Header,
    /// The body of a METAR.
    Metar,
    /// The body of a TAF.
    Taf,
    /// The remarks following `RMK`.
    Rmk,
}

/// A group as returned by a parser.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroupInfo {
    pub group: Group,
    pub report_part: ReportPart,
    /// The group's text as it appears in the report.
    pub raw: String,
}

impl GroupInfo {
    pub fn new(group: Group, report_part: ReportPart, raw: impl Into<String>) -> Self {
        Self {
            group,
            report_part,
            raw: raw.into(),
        }
    }
}
