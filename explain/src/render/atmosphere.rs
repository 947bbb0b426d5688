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

use metar::groups::TemperatureGroup;
use metar::measurements::{Pressure, PressureUnit, Temperature, TemperatureUnit, UnitOfMeasure};

use super::phrase::{whole, NOT_REPORTED};

pub(super) fn render_temperature(group: &TemperatureGroup) -> String {
    let mut s = format!(
        "Temperature: {}, Dew point: {}",
        temperature(&group.air),
        temperature(&group.dew_point)
    );

    if let Some(rh) = group.relative_humidity {
        s.push_str(&format!(" (RH: {}%)", whole(rh)));
    }

    s
}

pub(super) fn render_pressure(pressure: &Pressure) -> String {
    let Some(value) = pressure.value() else {
        return format!("Pressure: {NOT_REPORTED}");
    };

    let unit = pressure.unit();
    let mut s = format!("Pressure: {value} {}", unit.symbol());

    if unit == PressureUnit::InchesHg {
        if let Some(h_pa) = pressure.convert_to(PressureUnit::Hectopascal) {
            s.push_str(&format!(" ({} hPa)", whole(h_pa)));
        }
    }

    s
}

/// Temperature in its unit followed by the other unit, e.g. `20°C (68°F)`.
fn temperature(t: &Temperature) -> String {
    let Some(value) = t.value() else {
        return NOT_REPORTED.to_string();
    };

    // M00 may arrive as -0.0
    let value = value + 0.0;

    let other = match t.unit() {
        TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
        TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
    };

    match t.convert_to(other) {
        Some(converted) => format!(
            "{value}{} ({}{})",
            t.unit().symbol(),
            whole(converted),
            other.symbol()
        ),
        None => format!("{value}{}", t.unit().symbol()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(air: Temperature, dew_point: Temperature, rh: Option<f32>) -> TemperatureGroup {
        TemperatureGroup {
            air,
            dew_point,
            relative_humidity: rh,
        }
    }

    #[test]
    fn air_and_dew_point() {
        let t = group(Temperature::c(20.0), Temperature::c(15.0), None);
        assert_eq!(
            render_temperature(&t),
            "Temperature: 20°C (68°F), Dew point: 15°C (59°F)"
        );
    }

    #[test]
    fn below_freezing_with_humidity() {
        let t = group(Temperature::c(-3.0), Temperature::c(-5.0), Some(86.2));
        assert_eq!(
            render_temperature(&t),
            "Temperature: -3°C (27°F), Dew point: -5°C (23°F) (RH: 86%)"
        );
    }

    #[test]
    fn humidity_is_rounded() {
        let t = group(Temperature::c(10.0), Temperature::c(8.0), Some(86.7));
        assert_eq!(
            render_temperature(&t),
            "Temperature: 10°C (50°F), Dew point: 8°C (46°F) (RH: 87%)"
        );
    }

    #[test]
    fn minus_zero_reads_zero() {
        let t = group(Temperature::c(-0.0), Temperature::c(-2.0), None);
        assert_eq!(
            render_temperature(&t),
            "Temperature: 0°C (32°F), Dew point: -2°C (28°F)"
        );
    }

    #[test]
    fn missing_dew_point() {
        let missing = Temperature::not_reported(TemperatureUnit::Celsius);
        let t = group(Temperature::c(31.0), missing, None);
        assert_eq!(
            render_temperature(&t),
            "Temperature: 31°C (88°F), Dew point: not reported"
        );

        let t = group(missing, missing, None);
        assert_eq!(
            render_temperature(&t),
            "Temperature: not reported, Dew point: not reported"
        );
    }

    #[test]
    fn pressure_per_unit() {
        assert_eq!(render_pressure(&Pressure::h_pa(1013.0)), "Pressure: 1013 hPa");
        assert_eq!(
            render_pressure(&Pressure::in_hg(29.92)),
            "Pressure: 29.92 inHg (1013 hPa)"
        );
        assert_eq!(render_pressure(&Pressure::mm_hg(751.0)), "Pressure: 751 mmHg");
        assert_eq!(
            render_pressure(&Pressure::not_reported(PressureUnit::InchesHg)),
            "Pressure: not reported"
        );
    }
}
