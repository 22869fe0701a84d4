//! Benchmarks for constraint dispatch and nested walking
//!
//! Measures:
//! - a single constraint on a single value
//! - a small struct with several fields
//! - a slice of nested validatables of growing length
//! - sequential vs concurrent combinators over the same branches

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use verity_validator::prelude::*;

struct Item {
    name: String,
    quantity: i64,
}

impl Validatable for Item {
    fn validate(&self, validator: &Validator) -> Result<(), Error> {
        validator.validate(&[
            &string(&self.name)
                .with(it::is_not_blank())
                .with(it::has_max_length(64))
                .at_property("name"),
            &number(self.quantity)
                .with(it::is_positive())
                .at_property("quantity"),
        ])
    }
}

fn items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            name: if i % 10 == 0 {
                String::new()
            } else {
                format!("item-{i}")
            },
            quantity: i as i64 - 5,
        })
        .collect()
}

fn single_constraint(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/single");
    let validator = Validator::new();

    group.bench_function("string_valid", |b| {
        b.iter(|| {
            let name = string(black_box("hello")).with(it::is_not_blank());
            black_box(validator.validate(&[&name]))
        });
    });

    group.bench_function("string_invalid", |b| {
        b.iter(|| {
            let name = string(black_box("")).with(it::is_not_blank());
            black_box(validator.validate(&[&name]))
        });
    });

    group.bench_function("number_range", |b| {
        b.iter(|| {
            let age = number(black_box(42)).with(it::is_between(0, 100));
            black_box(validator.validate(&[&age]))
        });
    });

    group.finish();
}

fn nested_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/nested");
    let validator = Validator::new();

    for &count in &[1usize, 10, 100] {
        let values = items(count);
        let id = BenchmarkId::new("valid_each", count);
        group.bench_with_input(id, &values, |b, values| {
            b.iter(|| {
                let items = valid_each(values).at_property("items");
                black_box(validator.validate(&[&items]))
            });
        });
    }

    group.finish();
}

fn combinators(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch/combinators");
    let validator = Validator::new();
    let values = items(8);

    group.bench_function("all", |b| {
        b.iter(|| {
            let mut tree = all();
            for (index, item) in values.iter().enumerate() {
                tree = tree.with(valid(item).at_index(index));
            }
            black_box(validator.validate(&[&tree]))
        });
    });

    group.bench_function("concurrently", |b| {
        b.iter(|| {
            let mut tree = concurrently();
            for (index, item) in values.iter().enumerate() {
                tree = tree.with(valid(item).at_index(index));
            }
            black_box(validator.validate(&[&tree]))
        });
    });

    group.finish();
}

criterion_group!(benches, single_constraint, nested_walk, combinators);
criterion_main!(benches);
