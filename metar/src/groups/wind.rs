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

use crate::measurements::{Speed, SpeedUnit};

/// Direction the wind is blowing from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Direction in degrees true, e.g. `270` of `27010KT`.
    Degrees(u16),
    /// Variable direction (`VRB`).
    Variable,
    /// No directional variation (`NDV`).
    NoDirectionalVariation,
    NotReported,
}

/// Surface wind, e.g. `27010G18KT` or `00000KT`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindGroup {
    pub direction: Direction,
    pub speed: Speed,
    pub gust: Speed,
    /// The wind is calm (`00000KT`).
    pub calm: bool,
}

impl WindGroup {
    /// Creates a calm wind.
    pub fn calm() -> Self {
        Self {
            direction: Direction::Degrees(0),
            speed: Speed::kt(0.0),
            gust: Speed::not_reported(SpeedUnit::Knots),
            calm: true,
        }
    }
}
