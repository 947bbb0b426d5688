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

//! Decoded METAR and TAF reports.
//!
//! This crate models what a METAR/TAF parser hands over once it has split a
//! report into its [groups] and classified each of them: the group payloads
//! with their [measurements], the report's [metadata] and the [`ReportPart`]
//! a group was found in. It does not parse report text itself. A parser
//! implements [`ReportParser`] and returns a [`ParseResult`].
//!
//! # Examples
//!
//! A surface wind group of a METAR, as a parser would return it for `27010G18KT`:
//!
//! ```
//! use metar::groups::{Direction, Group, GroupInfo, ReportPart, WindGroup};
//! use metar::measurements::Speed;
//!
//! let wind = GroupInfo::new(
//!     Group::Wind(WindGroup {
//!         direction: Direction::Degrees(270),
//!         speed: Speed::kt(10.0),
//!         gust: Speed::kt(18.0),
//!         calm: false,
//!     }),
//!     ReportPart::Metar,
//!     "27010G18KT",
//! );
//!
//! assert_eq!(wind.raw, "27010G18KT");
//! ```
//!
//! [groups]: crate::groups
//! [measurements]: crate::measurements
//! [metadata]: crate::ReportMetadata

mod error;
mod report;

pub mod groups;
pub mod measurements;

pub use error::Error;
pub use report::*;
