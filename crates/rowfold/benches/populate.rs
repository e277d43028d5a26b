use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rowfold::{Populate, Value, ValueRecord};
use std::hint::black_box;

fn setup_rows(
    num_parents: usize,
    children_per_parent: usize,
) -> (Vec<ValueRecord>, Vec<ValueRecord>) {
    let parents = (0..num_parents as i64)
        .map(|id| {
            ValueRecord::from([
                ("id", Value::from(id + 1)),
                ("name", Value::from(format!("User {}", id))),
            ])
        })
        .collect();

    let mut children = Vec::with_capacity(num_parents * children_per_parent);
    for i in 0..children_per_parent {
        for id in 0..num_parents as i64 {
            children.push(ValueRecord::from([
                ("user_id", Value::from(id + 1)),
                ("title", Value::from(format!("Post {} for User {}", i, id))),
            ]));
        }
    }

    (parents, children)
}

fn populate_benchmarks(c: &mut Criterion) {
    let sizes = vec![(50, 10), (100, 20), (200, 25), (1000, 50)];
    let populate = Populate::new("posts", "id", "user_id", "post_id");

    let mut group = c.benchmark_group("populate");

    for (parents, children) in &sizes {
        let size_label = format!("{}p_{}c", parents, children);
        let (parent_rows, child_rows) = setup_rows(*parents, *children);

        group.bench_with_input(
            BenchmarkId::new("has_many", &size_label),
            &size_label,
            |b, _| {
                b.iter(|| black_box(populate.fold(parent_rows.clone(), &child_rows)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, populate_benchmarks);
criterion_main!(benches);
