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

/// Intensity or proximity of weather phenomena.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Qualifier {
    /// `-`
    Light,
    Moderate,
    /// `+`
    Heavy,
    /// `VC`
    Vicinity,
    /// `RE`
    Recent,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Descriptor {
    /// `MI`
    Shallow,
    /// `PR`
    Partial,
    /// `BC`
    Patches,
    /// `DR`
    LowDrifting,
    /// `BL`
    Blowing,
    /// `SH`
    Showers,
    /// `TS`
    Thunderstorm,
    /// `FZ`
    Freezing,
}

/// Precipitation, obscuration or other weather phenomenon.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phenomenon {
    Drizzle,
    Rain,
    Snow,
    Fog,
    Mist,
    Haze,
    Smoke,
    VolcanicAsh,
    Dust,
    Sand,
    Hail,
    SmallHail,
    IceCrystals,
    IcePellets,
    FunnelCloud,
    DustStorm,
    SandStorm,
}

/// Weather phenomena of one group like `-SHRA` or `+TSRAGR`.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherPhenomena {
    pub qualifier: Option<Qualifier>,
    pub descriptor: Option<Descriptor>,
    pub weather: Vec<Phenomenon>,
}

/// Present, recent or forecast weather.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeatherGroup {
    /// No significant weather (`NSW`).
    NoSignificantWeather,
    Phenomena(Vec<WeatherPhenomena>),
}
