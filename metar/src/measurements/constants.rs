// SPDX-License-Identifier: Apache-2.0
// Copyright 2025, 2026 Joe Pearson
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

pub const FEET_IN_METER: f32 = 0.3048;
pub const STATUTE_MILE_IN_METER: f32 = 1609.344;
pub const METER_PER_SECONDS_IN_KNOTS: f32 = 1.943844;
pub const KILOMETER_PER_HOUR_IN_METER_PER_SECONDS: f32 = 3.6;
pub const MILE_PER_HOUR_IN_METER_PER_SECONDS: f32 = 0.44704;
pub const KELVIN_IN_CELSIUS: f32 = 273.15;
/// Pascal per hectopascal.
pub const HECTOPASCAL_IN_PASCAL: f32 = 100.0;
/// Pascal per inch of mercury (33.8639 hPa).
pub const INCH_HG_IN_PASCAL: f32 = 3386.39;
/// Pascal per millimeter of mercury.
pub const MILLIMETER_HG_IN_PASCAL: f32 = 133.3224;
