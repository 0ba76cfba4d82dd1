use criterion::{criterion_group, criterion_main, Criterion};
use handler_typings::core::{Family, MAX_SUPPORTED_ARITY};
use handler_typings::emit::{assemble, emit, join_declarations};
use std::hint::black_box;

fn benchmark_full_emission(c: &mut Criterion) {
    let families = Family::builtin();

    c.bench_function("emit_all_families_default_arity", |b| {
        b.iter(|| {
            let declarations = emit(black_box(9), &families).unwrap();
            black_box(join_declarations(&declarations));
        })
    });

    c.bench_function("emit_all_families_max_arity", |b| {
        b.iter(|| {
            let declarations = emit(black_box(MAX_SUPPORTED_ARITY as i64), &families).unwrap();
            black_box(join_declarations(&declarations));
        })
    });
}

fn benchmark_single_signature(c: &mut Criterion) {
    let family = Family::builtin()
        .into_iter()
        .find(|f| f.name == "augment-message-handlers")
        .unwrap();

    c.bench_function("assemble_intersection_signature", |b| {
        b.iter(|| black_box(assemble(&family, black_box(MAX_SUPPORTED_ARITY))))
    });
}

criterion_group!(benches, benchmark_full_emission, benchmark_single_signature);
criterion_main!(benches);
