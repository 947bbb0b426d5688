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

use metar::groups::{Descriptor, Phenomenon, Qualifier, WeatherGroup};

use super::phrase::NOT_REPORTED;

/// Renders the phenomena as qualifier, descriptor and weather words.
///
/// Each word is followed by a space, thus a rendered weather group always
/// ends with a space unless there is no significant weather.
pub(super) fn render(group: &WeatherGroup) -> String {
    let phenomena = match group {
        WeatherGroup::NoSignificantWeather => {
            return "Weather: No significant weather".to_string();
        }
        WeatherGroup::Phenomena(phenomena) if phenomena.is_empty() => {
            return format!("Weather: {NOT_REPORTED}");
        }
        WeatherGroup::Phenomena(phenomena) => phenomena,
    };

    let mut s = String::from("Weather: ");

    for p in phenomena {
        let words = p
            .qualifier
            .map(qualifier)
            .into_iter()
            .chain(p.descriptor.map(descriptor))
            .chain(p.weather.iter().copied().map(phenomenon));

        for word in words {
            s.push_str(word);
            s.push(' ');
        }
    }

    s
}

fn qualifier(q: Qualifier) -> &'static str {
    match q {
        Qualifier::Light => "Light",
        Qualifier::Moderate => "Moderate",
        Qualifier::Heavy => "Heavy",
        Qualifier::Vicinity => "Vicinity",
        Qualifier::Recent => "Recent",
    }
}

fn descriptor(d: Descriptor) -> &'static str {
    match d {
        Descriptor::Shallow => "Shallow",
        Descriptor::Partial => "Partial",
        Descriptor::Patches => "Patches of",
        Descriptor::LowDrifting => "Low Drifting",
        Descriptor::Blowing => "Blowing",
        Descriptor::Showers => "Showers",
        Descriptor::Thunderstorm => "Thunderstorm",
        Descriptor::Freezing => "Freezing",
    }
}

fn phenomenon(w: Phenomenon) -> &'static str {
    match w {
        Phenomenon::Drizzle => "Drizzle",
        Phenomenon::Rain => "Rain",
        Phenomenon::Snow => "Snow",
        Phenomenon::Fog => "Fog",
        Phenomenon::Mist => "Mist",
        Phenomenon::Haze => "Haze",
        Phenomenon::Smoke => "Smoke",
        Phenomenon::VolcanicAsh => "Volcanic Ash",
        Phenomenon::Dust => "Dust",
        Phenomenon::Sand => "Sand",
        Phenomenon::Hail => "Hail",
        Phenomenon::SmallHail => "Small Hail",
        Phenomenon::IceCrystals => "Ice Crystals",
        Phenomenon::IcePellets => "Ice Pellets",
        Phenomenon::FunnelCloud => "Funnel Cloud",
        Phenomenon::DustStorm => "Dust Storm",
        Phenomenon::SandStorm => "Sand Storm",
    }
}

#[cfg(test)]
mod tests {
    use metar::groups::WeatherPhenomena;

    use super::*;

    #[test]
    fn no_significant_weather() {
        assert_eq!(
            render(&WeatherGroup::NoSignificantWeather),
            "Weather: No significant weather"
        );
    }

    #[test]
    fn qualifier_descriptor_and_weather_in_order() {
        let group = WeatherGroup::Phenomena(vec![WeatherPhenomena {
            qualifier: Some(Qualifier::Heavy),
            descriptor: Some(Descriptor::Thunderstorm),
            weather: vec![Phenomenon::Rain, Phenomenon::SmallHail],
        }]);
        assert_eq!(render(&group), "Weather: Heavy Thunderstorm Rain Small Hail ");
    }

    #[test]
    fn phenomena_are_concatenated() {
        let group = WeatherGroup::Phenomena(vec![
            WeatherPhenomena {
                qualifier: Some(Qualifier::Light),
                descriptor: Some(Descriptor::Freezing),
                weather: vec![Phenomenon::Drizzle],
            },
            WeatherPhenomena {
                qualifier: None,
                descriptor: Some(Descriptor::Patches),
                weather: vec![Phenomenon::Fog],
            },
            WeatherPhenomena {
                qualifier: Some(Qualifier::Vicinity),
                descriptor: Some(Descriptor::Showers),
                weather: Vec::new(),
            },
        ]);
        assert_eq!(
            render(&group),
            "Weather: Light Freezing Drizzle Patches of Fog Vicinity Showers "
        );
    }

    #[test]
    fn no_phenomena() {
        assert_eq!(
            render(&WeatherGroup::Phenomena(Vec::new())),
            "Weather: not reported"
        );
    }
}
