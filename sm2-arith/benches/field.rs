//! SM2 field element benchmarks

use criterion::{
    BenchmarkGroup, Criterion, criterion_group, criterion_main, measurement::Measurement,
};
use hex_literal::hex;
use sm2_arith::{CurveParams, FieldElement};

fn test_field_element_x(curve: &CurveParams) -> FieldElement<'_> {
    FieldElement::from_be_bytes(
        curve,
        &hex!("5ee38c2401c8484b25201d4d3d89a44a9854bc324d7926bc999e0cf0d66c2310"),
    )
    .unwrap()
}

fn test_field_element_y(curve: &CurveParams) -> FieldElement<'_> {
    FieldElement::from_be_bytes(
        curve,
        &hex!("531fc602a0903e540e5caca28f6094b3e5f379c00605f2f3bbfec6e15b7a059b"),
    )
    .unwrap()
}

fn bench_field_element_mul<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, curve: &CurveParams) {
    let x = test_field_element_x(curve);
    let y = test_field_element_y(curve);
    group.bench_function("mul", |b| b.iter(|| &x * &y));
}

fn bench_field_element_square<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &CurveParams,
) {
    let x = test_field_element_x(curve);
    group.bench_function("square", |b| b.iter(|| x.square()));
}

fn bench_field_element_invert<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &CurveParams,
) {
    let x = test_field_element_x(curve);
    group.bench_function("invert", |b| b.iter(|| x.invert()));
}

fn bench_field_element_sqrt<M: Measurement>(
    group: &mut BenchmarkGroup<'_, M>,
    curve: &CurveParams,
) {
    let x = test_field_element_x(curve).square();
    group.bench_function("sqrt", |b| b.iter(|| x.sqrt()));
}

fn bench_field_element(c: &mut Criterion) {
    let curve = CurveParams::sm2_test();
    let mut group = c.benchmark_group("field element operations");
    bench_field_element_mul(&mut group, &curve);
    bench_field_element_square(&mut group, &curve);
    bench_field_element_invert(&mut group, &curve);
    bench_field_element_sqrt(&mut group, &curve);
    group.finish();
}

criterion_group!(benches, bench_field_element);
criterion_main!(benches);
