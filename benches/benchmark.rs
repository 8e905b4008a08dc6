use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use dictionaries::{AvlTree, HashTable, Traversal};

const N: usize = 2_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    // Every insert rebuilds the whole tree, so N stays small.
    c.bench_function("tree_insert", |b| {
        b.iter(|| {
            let mut tree = AvlTree::new();
            for value in &values {
                tree.insert(*value);
            }
            tree
        })
    });

    let tree: AvlTree<i32> = values.iter().copied().collect();

    c.bench_function("tree_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(tree.contains(value));
            }
        })
    });

    c.bench_function("tree_iter_level_order", |b| {
        b.iter(|| {
            for value in tree.iter(Traversal::LevelOrder) {
                black_box(value);
            }
        })
    });

    c.bench_function("table_insert", |b| {
        b.iter(|| {
            let mut table = HashTable::new();
            for value in &values {
                table.insert(*value, *value);
            }
            table
        })
    });

    let table: HashTable<i32, i32> = values.iter().map(|value| (*value, *value)).collect();

    c.bench_function("table_at", |b| {
        b.iter(|| {
            for value in &values {
                black_box(table.at(value).ok());
            }
        })
    });

    c.bench_function("table_remove", |b| {
        b.iter(|| {
            let mut table = table.clone();
            for value in &values {
                table.remove(value);
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
