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

use super::Runway;
use crate::measurements::Distance;

/// Tendency of the runway visual range during the last 10 minutes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisibilityTrend {
    /// Increasing (`U`).
    Upward,
    /// Decreasing (`D`).
    Downward,
    /// No distinct change (`N`).
    Neutral,
    NotReported,
}

/// Horizontal visibility.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VisibilityGroup {
    /// Prevailing visibility, e.g. `9999` or `10SM`.
    Prevailing(Distance),
    /// Visibility observed from the control tower (`TWR VIS`).
    Tower(Distance),
    /// Visibility observed at the surface (`SFC VIS`).
    Surface(Distance),
    /// Visibility reported for a runway (`VIS ... RWY`).
    Runway(Distance),
    /// Runway visual range, e.g. `R24L/0600U`.
    Rvr {
        runway: Option<Runway>,
        visibility: Distance,
        trend: Option<VisibilityTrend>,
    },
    /// Runway visual range varying between two values, e.g. `R24/0600V1200FT`.
    VariableRvr {
        runway: Option<Runway>,
        min: Distance,
        max: Distance,
        trend: Option<VisibilityTrend>,
    },
}
