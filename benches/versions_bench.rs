use criterion::{black_box, criterion_group, criterion_main, Criterion};
use semantic_versions::prelude::*;

fn strict_ok_inputs() -> Vec<&'static str> {
    vec![
        "1.2.3",
        "10.20.30",
        "1.0.0-alpha.beta.1",
        "1.0.0-rc.1+build.123",
        "2.0.0+exp.sha.5114f85",
    ]
}

fn parse_strict_ok(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse_strict_or_fail(input);
        assert!(res.is_ok());
    }
}

fn partial_ok_inputs() -> Vec<&'static str> {
    vec!["1", "1.2", "1.2.3", "1-alpha", "1.2+build"]
}

fn parse_partial_ok(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse_or_fail(input);
        assert!(res.is_ok());
    }
}

fn invalid_inputs() -> Vec<&'static str> {
    vec!["01.2.3", "1.2.3-01", "1.2.3-alpha..1", "1.2.3+", "v1.2.3"]
}

fn parse_invalid(inputs: &[&str]) {
    for input in inputs {
        let res = Version::parse_strict_or_fail(input);
        assert!(res.is_err());
    }
}

fn sort_inputs() -> Vec<Version> {
    [
        "1.0.0-rc.1",
        "1.0.0-beta.11",
        "1.0.0",
        "1.0.0-alpha.beta",
        "1.0.0-beta.2",
        "1.0.0-alpha",
        "1.0.0-beta",
        "1.0.0-alpha.1",
    ]
    .into_iter()
    .filter_map(Version::parse_strict)
    .collect()
}

fn sort_versions(mut versions: Vec<Version>) {
    sort_by_version(&mut versions);
    assert!(versions[0] < versions[versions.len() - 1]);
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_strict_ok", |b| {
        b.iter(|| parse_strict_ok(black_box(&strict_ok_inputs())))
    });
    c.bench_function("parse_partial_ok", |b| {
        b.iter(|| parse_partial_ok(black_box(&partial_ok_inputs())))
    });
    c.bench_function("parse_invalid", |b| {
        b.iter(|| parse_invalid(black_box(&invalid_inputs())))
    });
    c.bench_function("sort_prereleases", |b| {
        b.iter(|| sort_versions(black_box(sort_inputs())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
