use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fc_settings::{comprehensive_fc_parameters, feature_column_names, from_columns, FcVariant};

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_comprehensive", |b| {
        b.iter(comprehensive_fc_parameters)
    });
    c.bench_function("build_efficient", |b| b.iter(|| FcVariant::Efficient.build()));
}

fn bench_from_columns(c: &mut Criterion) {
    let names = feature_column_names("x", &comprehensive_fc_parameters());
    c.bench_function("from_columns_comprehensive", |b| {
        b.iter(|| from_columns(black_box(&names), None))
    });
}

criterion_group!(benches, bench_build, bench_from_columns);
criterion_main!(benches);
