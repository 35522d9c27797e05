use criterion::{Criterion, black_box, criterion_group, criterion_main};
use galcoord_rs::{
    AngleUnit, FrameUnitConverter, euclidean_distance, heliocentric_to_galactocentric,
    parse_angle,
};

fn distance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("distance");
    group.bench_function("euclidean_distance", |b| {
        b.iter(|| euclidean_distance(black_box(-0.197), black_box(6.845), black_box(0.019)))
    });
    group.bench_function("heliocentric_to_galactocentric", |b| {
        b.iter(|| {
            heliocentric_to_galactocentric(
                black_box(1.32),
                black_box(351.416778966),
                black_box(0.645254241),
                true,
            )
        })
    });
    group.finish();
}

fn parse_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("colon_hours", |b| {
        b.iter(|| parse_angle(black_box("13:11:14.44"), AngleUnit::HourAngle))
    });
    group.bench_function("lettered_degrees", |b| {
        b.iter(|| parse_angle(black_box("-62d47m25.5s"), AngleUnit::Degree))
    });
    group.finish();
}

fn converter_bench(c: &mut Criterion) {
    let ra: Vec<String> = (0..1000)
        .map(|i| format!("{:02}:{:02}:{:05.2}", i % 24, i % 60, (i % 600) as f64 / 10.0))
        .collect();
    let dec: Vec<String> = (0..1000)
        .map(|i| {
            let sign = if i % 2 == 0 { "-" } else { "+" };
            format!("{sign}{:02}:{:02}:{:04.1}", i % 90, i % 60, (i % 60) as f64 / 2.0)
        })
        .collect();
    let conv = FrameUnitConverter::new(ra.clone(), dec.clone()).expect("bench input parses");

    let mut group = c.benchmark_group("converter");
    group.bench_function("new_1000", |b| {
        b.iter(|| FrameUnitConverter::new(black_box(ra.clone()), black_box(dec.clone())))
    });
    group.bench_function("to_eq_deg_1000", |b| b.iter(|| black_box(&conv).to_eq_deg()));
    group.bench_function("to_gal_deg_1000", |b| b.iter(|| black_box(&conv).to_gal_deg()));
    group.finish();
}

criterion_group!(benches, distance_bench, parse_bench, converter_bench);
criterion_main!(benches);
