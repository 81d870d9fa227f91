#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use simple_vec::{reserve, SimpleVec};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: usize = 100;
    const LARGE_COUNT: usize = 1000;

    for count in [SMALL_COUNT, LARGE_COUNT] {
        c.bench_function(&format!("simplevec push_back {} values", count), |b| {
            b.iter(|| {
                let mut buf = SimpleVec::<usize>::new();
                for value in 0..count {
                    buf.push_back(black_box(value));
                }
                buf
            });
        });

        c.bench_function(
            &format!("simplevec reserve({0}) push_back {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = SimpleVec::<usize>::from(reserve(count));
                    for value in 0..count {
                        buf.push_back(black_box(value));
                    }
                    buf
                });
            },
        );

        c.bench_function(&format!("std vec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
                buf
            });
        });

        c.bench_function(
            &format!("std vec with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut buf = Vec::<usize>::with_capacity(count);
                    for value in 0..count {
                        buf.push(black_box(value));
                    }
                    buf
                });
            },
        );

        c.bench_function(&format!("simplevec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = SimpleVec::<usize>::new();
                for value in 0..count {
                    let _ = buf.insert(0, black_box(value));
                }
                buf
            });
        });

        c.bench_function(&format!("std vec insert front {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<usize>::new();
                for value in 0..count {
                    buf.insert(0, black_box(value));
                }
                buf
            });
        });

        c.bench_function(&format!("simplevec erase front {} values", count), |b| {
            let source = SimpleVec::<usize>::from_iter(0..count);
            b.iter(|| {
                let mut buf = source.clone();
                while !buf.is_empty() {
                    black_box(buf.erase(0));
                }
                buf
            });
        });

        c.bench_function(&format!("std vec remove front {} values", count), |b| {
            let source = Vec::<usize>::from_iter(0..count);
            b.iter(|| {
                let mut buf = source.clone();
                while !buf.is_empty() {
                    black_box(buf.remove(0));
                }
                buf
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
