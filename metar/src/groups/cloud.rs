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

use crate::measurements::{DistanceUnit, Length};
use crate::Error;

/// Keyword stating that there are no clouds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClearSky {
    /// No clouds below 12000 ft detected by an automated station.
    Clr,
    /// Sky clear.
    Skc,
    /// No significant clouds.
    Nsc,
    /// No clouds detected by an automated station.
    Ncd,
}

/// Sky coverage of a cloud layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudAmount {
    Few,
    Scattered,
    Broken,
    Overcast,
    NotReported,
}

/// Convective cloud type appended to a cloud layer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConvectiveType {
    /// `CB`
    Cumulonimbus,
    /// `TCU`
    ToweringCumulus,
}

/// Clouds, cloud layers and obscurations.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudGroup {
    /// No clouds, stated by the keyword if any.
    NoClouds(Option<ClearSky>),
    /// A cloud layer like `BKN030CB`.
    Layer {
        amount: CloudAmount,
        height: Length,
        convective: Option<ConvectiveType>,
    },
    /// Sky obscured with a vertical visibility like `VV002`.
    VerticalVisibility(Length),
    /// Sky obscured, with the obscuration's type if known.
    Obscuration(Option<CloudType>),
    /// Other cloud information like a ceiling (`CIG 015`), `CHINO` or
    /// `CLD MISG`.
    Other,
}

/// Cloud or obscuration type as reported in remarks.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CloudKind {
    Snow,
    Fog,
    Smoke,
    VolcanicAsh,
    Haze,
    Mist,
    Cumulonimbus,
    ToweringCumulus,
    Cumulus,
    CumulusFractus,
    Stratocumulus,
    Nimbostratus,
    Stratus,
    StratusFractus,
    Altostratus,
    Altocumulus,
    Cirrus,
    Cirrostratus,
    Cirrocumulus,
    /// Any other type, e.g. altocumulus castellanus or blowing dust.
    Unknown,
}

/// A cloud or obscuration type with its coverage in okta.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CloudType {
    kind: CloudKind,
    okta: u8,
    height: Length,
}

impl CloudType {
    /// Creates a cloud type covering `okta` eighths of the sky at the `height`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOkta`] if `okta` is greater than 8.
    ///
    /// [`InvalidOkta`]: Error::InvalidOkta
    pub fn new(kind: CloudKind, okta: u8, height: Length) -> Result<Self, Error> {
        if okta > 8 {
            Err(Error::InvalidOkta { okta })
        } else {
            Ok(Self { kind, okta, height })
        }
    }

    /// Creates a cloud type without height.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOkta`] if `okta` is greater than 8.
    ///
    /// [`InvalidOkta`]: Error::InvalidOkta
    pub fn without_height(kind: CloudKind, okta: u8) -> Result<Self, Error> {
        Self::new(kind, okta, Length::not_reported(DistanceUnit::Feet))
    }

    pub fn kind(&self) -> CloudKind {
        self.kind
    }

    pub fn okta(&self) -> u8 {
        self.okta
    }

    pub fn height(&self) -> Length {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn okta_is_at_most_eight() {
        assert!(CloudType::without_height(CloudKind::Fog, 8).is_ok());
        assert_eq!(
            CloudType::without_height(CloudKind::Fog, 9),
            Err(Error::InvalidOkta { okta: 9 })
        );
    }
}
