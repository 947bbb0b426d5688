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

use metar::groups::{ClearSky, CloudAmount, CloudGroup, CloudKind, CloudType, ConvectiveType};

use super::phrase::{self, NOT_REPORTED};

pub(super) fn render(group: &CloudGroup, raw: &str) -> String {
    match group {
        CloudGroup::NoClouds(clear_sky) => match clear_sky {
            Some(ClearSky::Clr | ClearSky::Skc) => "Sky: Clear",
            Some(ClearSky::Nsc) => "Sky: No significant clouds",
            Some(ClearSky::Ncd) => "Sky: No clouds detected",
            None => "Sky: No clouds",
        }
        .to_string(),

        CloudGroup::Layer {
            amount,
            height,
            convective,
        } => {
            let mut s = String::from("Cloud layer: ");

            s.push_str(match amount {
                CloudAmount::Few => "Few clouds (1/8 to 2/8 coverage)",
                CloudAmount::Scattered => "Scattered clouds (3/8 to 4/8 coverage)",
                CloudAmount::Broken => "Broken clouds (5/8 to 7/8 coverage)",
                CloudAmount::Overcast => "Overcast (8/8 coverage)",
                CloudAmount::NotReported => "amount not reported",
            });

            if let Some(height) = phrase::feet(height) {
                s.push_str(&format!(" at {height}"));
            }

            match convective {
                Some(ConvectiveType::Cumulonimbus) => s.push_str(" (Cumulonimbus)"),
                Some(ConvectiveType::ToweringCumulus) => s.push_str(" (Towering Cumulus)"),
                None => (),
            }

            s
        }

        CloudGroup::VerticalVisibility(height) => format!(
            "Vertical visibility: {}",
            phrase::feet(height).unwrap_or_else(|| NOT_REPORTED.to_string())
        ),

        CloudGroup::Obscuration(Some(cloud_type)) => {
            let obscuration = match cloud_type.kind() {
                kind @ (CloudKind::Snow
                | CloudKind::Fog
                | CloudKind::Smoke
                | CloudKind::VolcanicAsh
                | CloudKind::Haze
                | CloudKind::Mist) => name(kind),
                _ => "unknown",
            };

            format!(
                "Obscuration: {obscuration} covering {}/8 of the sky",
                cloud_type.okta()
            )
        }

        CloudGroup::Obscuration(None) => "Obscuration".to_string(),

        CloudGroup::Other => format!("Cloud information: {raw}"),
    }
}

/// Renders a header followed by one line per cloud type.
pub(super) fn render_types(cloud_types: &[CloudType]) -> String {
    let mut s = String::from("Obscuration / cloud layers:");

    if cloud_types.is_empty() {
        s.push(' ');
        s.push_str(NOT_REPORTED);
    }

    for cloud_type in cloud_types {
        s.push_str(&format!(
            "\n{} covering {}/8 of the sky",
            name(cloud_type.kind()),
            cloud_type.okta()
        ));

        if let Some(height) = phrase::feet(&cloud_type.height()) {
            s.push_str(&format!(" at {height}"));
        }
    }

    s
}

fn name(kind: CloudKind) -> &'static str {
    match kind {
        CloudKind::Snow => "snow",
        CloudKind::Fog => "fog",
        CloudKind::Smoke => "smoke",
        CloudKind::VolcanicAsh => "volcanic ash",
        CloudKind::Haze => "haze",
        CloudKind::Mist => "mist",
        CloudKind::Cumulonimbus => "cumulonimbus",
        CloudKind::ToweringCumulus => "towering cumulus",
        CloudKind::Cumulus => "cumulus",
        CloudKind::CumulusFractus => "cumulus fractus",
        CloudKind::Stratocumulus => "stratocumulus",
        CloudKind::Nimbostratus => "nimbostratus",
        CloudKind::Stratus => "stratus",
        CloudKind::StratusFractus => "stratus fractus",
        CloudKind::Altostratus => "altostratus",
        CloudKind::Altocumulus => "altocumulus",
        CloudKind::Cirrus => "cirrus",
        CloudKind::Cirrostratus => "cirrostratus",
        CloudKind::Cirrocumulus => "cirrocumulus",
        CloudKind::Unknown => "unknown",
    }
}
