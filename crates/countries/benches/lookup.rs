use countries::{
    get_all, get_by_alpha2, get_by_alpha3, get_by_capital, get_by_country_code, get_by_name,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");

    // Warm the catalog so index construction is not measured.
    let _ = get_by_alpha2("US");

    let keys = [
        ("hit", "US", "USA", "840", "united states of america", "washington"),
        ("miss", "ZZ", "ZZZ", "000", "atlantis", "atlantis city"),
    ];

    for (label, a2, a3, code, name, capital) in keys {
        group.bench_with_input(BenchmarkId::new("alpha2", label), &a2, |b, k| {
            b.iter(|| get_by_alpha2(black_box(k)));
        });
        group.bench_with_input(BenchmarkId::new("alpha3", label), &a3, |b, k| {
            b.iter(|| get_by_alpha3(black_box(k)));
        });
        group.bench_with_input(BenchmarkId::new("country_code", label), &code, |b, k| {
            b.iter(|| get_by_country_code(black_box(k)));
        });
        group.bench_with_input(BenchmarkId::new("name", label), &name, |b, k| {
            b.iter(|| get_by_name(black_box(k)));
        });
        group.bench_with_input(BenchmarkId::new("capital", label), &capital, |b, k| {
            b.iter(|| get_by_capital(black_box(k)));
        });
    }

    group.finish();
}

fn bench_get_all(c: &mut Criterion) {
    c.bench_function("get_all", |b| b.iter(|| black_box(get_all())));
}

criterion_group!(benches, bench_lookups, bench_get_all);
criterion_main!(benches);
