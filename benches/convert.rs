use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ewts_engine::{unicode_to_wylie, validate, wylie_to_unicode};

const SAMPLE: &str = "oM ma Ni pa dme hUM| bsgrubs bla ma sangs rgyas byang chub sems dpa'";

fn bench_forward(c: &mut Criterion) {
    c.bench_function("wylie_to_unicode", |b| {
        b.iter(|| wylie_to_unicode(black_box(SAMPLE), true))
    });
}

fn bench_reverse(c: &mut Criterion) {
    let unicode = wylie_to_unicode(SAMPLE, true);
    c.bench_function("unicode_to_wylie", |b| {
        b.iter(|| unicode_to_wylie(black_box(&unicode)))
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate", |b| b.iter(|| validate(black_box(SAMPLE))));
}

criterion_group!(benches, bench_forward, bench_reverse, bench_validate);
criterion_main!(benches);
