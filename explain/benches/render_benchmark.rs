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

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use metar::groups::*;
use metar::measurements::{Distance, Length, Pressure, Speed, Temperature};
use metar::{ParseResult, ReportKind, ReportMetadata};
use metar_explain::render::render;

fn wind() -> Group {
    Group::Wind(WindGroup {
        direction: Direction::Degrees(270),
        speed: Speed::kt(10.0),
        gust: Speed::kt(18.0),
        calm: false,
    })
}

fn rvr() -> Group {
    Group::Visibility(VisibilityGroup::VariableRvr {
        runway: Runway::new(24, Some(RunwayDesignator::Left)).ok(),
        min: Distance::ft(600.0),
        max: Distance::ft(1200.0).more_than(),
        trend: Some(VisibilityTrend::Upward),
    })
}

fn report() -> ParseResult {
    let groups = vec![
        GroupInfo::new(Group::Keyword(Keyword::Metar), ReportPart::Header, "METAR"),
        GroupInfo::new(Group::Location("KLAX".to_string()), ReportPart::Header, "KLAX"),
        GroupInfo::new(wind(), ReportPart::Metar, "27010G18KT"),
        GroupInfo::new(
            Group::Visibility(VisibilityGroup::Prevailing(Distance::sm(2.0))),
            ReportPart::Metar,
            "2SM",
        ),
        GroupInfo::new(rvr(), ReportPart::Metar, "R24L/0600V1200FTU"),
        GroupInfo::new(
            Group::Cloud(CloudGroup::Layer {
                amount: CloudAmount::Broken,
                height: Length::ft(3000.0),
                convective: Some(ConvectiveType::Cumulonimbus),
            }),
            ReportPart::Metar,
            "BKN030CB",
        ),
        GroupInfo::new(
            Group::Temperature(TemperatureGroup {
                air: Temperature::c(20.0),
                dew_point: Temperature::c(15.0),
                relative_humidity: None,
            }),
            ReportPart::Metar,
            "20/15",
        ),
        GroupInfo::new(Group::Pressure(Pressure::in_hg(29.92)), ReportPart::Metar, "A2992"),
        GroupInfo::new(Group::Keyword(Keyword::Rmk), ReportPart::Metar, "RMK"),
        GroupInfo::new(Group::Misc, ReportPart::Rmk, "SLP132"),
    ];

    ParseResult {
        metadata: ReportMetadata {
            kind: ReportKind::Metar,
            location: "KLAX".to_string(),
            ..Default::default()
        },
        groups,
    }
}

/// Benchmark rendering single groups
fn bench_groups(c: &mut Criterion) {
    let wind = wind();
    c.bench_function("wind", |b| {
        b.iter(|| render(black_box(&wind), ReportPart::Metar, "27010G18KT"))
    });

    let rvr = rvr();
    c.bench_function("variable rvr", |b| {
        b.iter(|| render(black_box(&rvr), ReportPart::Metar, "R24L/0600V1200FTU"))
    });
}

/// Benchmark explaining a whole report
fn bench_report(c: &mut Criterion) {
    let result = report();
    let parser = |_: &str| result.clone();

    let mut group = c.benchmark_group("report");
    group.throughput(Throughput::Elements(result.groups.len() as u64));

    group.bench_function("explain", |b| {
        b.iter(|| metar_explain::explain(&parser, black_box("METAR KLAX ...")))
    });

    group.bench_function("explain and print", |b| {
        b.iter(|| metar_explain::explain(&parser, black_box("METAR KLAX ...")).to_string())
    });

    group.finish();
}

criterion_group!(benches, bench_groups, bench_report);
criterion_main!(benches);
