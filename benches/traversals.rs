use std::collections::BTreeSet;

use rand::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};

use bst_traversal::{BinarySearchTree, Order, Traversal};

#[derive(Debug, Clone)]
struct Values {
    values: Vec<i64>,
}

impl Values {
    /// Deterministically generates a set of `nvalues` values
    ///
    /// All values are guaranteed to be unique and ordered randomly.
    pub fn generate(nvalues: u32) -> Self {
        // Want to spread values out so we generate interesting trees. Sorted input would give a
        // tree that is really a linked list.

        let mut values = Vec::new();

        let n = nvalues as i64;
        for i in 0..n {
            // [0..n] - n/2 = [-n/2..n/2]
            // Multiply by 10 so that numbers aren't consecutive
            let value = (i - n/2) * 10;
            values.push(value);
        }

        // Use seed to make this deterministic
        let mut rng = StdRng::seed_from_u64(45930923092);
        // Shuffle to ensure that values are in a uniformly random order
        values.shuffle(&mut rng);

        Self {values}
    }

    pub fn tree(&self, len: usize) -> BinarySearchTree<i64> {
        let mut tree = BinarySearchTree::new();
        for &value in &self.values[..len] {
            tree.insert(value);
        }
        tree
    }

    pub fn btree_set(&self, len: usize) -> BTreeSet<i64> {
        self.values[..len].iter().copied().collect()
    }
}

fn slice_max<T: Copy + Ord>(data: &[T]) -> T {
    data.iter().max().copied().expect("bug: slice was empty")
}

/// Walks a traversal through the `Traversal` interface
fn benchmark_traversal(mut iter: Box<dyn Traversal<'_, i64> + '_>) {
    while iter.has_next() {
        black_box(iter.try_next().ok());
    }
}

pub fn bench_tree_insert(c: &mut Criterion) {
    const INSERTS: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(INSERTS) as u32);

    let mut group = c.benchmark_group("tree insert");
    for inserts in INSERTS {
        group.bench_with_input(BenchmarkId::new("BTreeSet", inserts), inserts, |b, &inserts| {
            b.iter(|| values.btree_set(inserts))
        });
        group.bench_with_input(BenchmarkId::new("BinarySearchTree", inserts), inserts, |b, &inserts| {
            b.iter(|| values.tree(inserts))
        });
    }
    group.finish();
}

pub fn bench_traversals(c: &mut Criterion) {
    const SIZES: &[usize] = &[50, 100, 500, 1000, 2000];

    let values = Values::generate(slice_max(SIZES) as u32);

    let mut group = c.benchmark_group("traversal");
    for size in SIZES {
        let set = values.btree_set(*size);
        let tree = values.tree(*size);

        group.bench_with_input(BenchmarkId::new("BTreeSet", size), size, |b, _| {
            b.iter(|| set.iter().for_each(|value| { black_box(value); }))
        });
        group.bench_with_input(BenchmarkId::new("inorder", size), size, |b, _| {
            b.iter(|| tree.iter_inorder().for_each(|value| { black_box(value); }))
        });
        group.bench_with_input(BenchmarkId::new("preorder", size), size, |b, _| {
            b.iter(|| tree.iter_preorder().for_each(|value| { black_box(value); }))
        });
        group.bench_with_input(BenchmarkId::new("postorder", size), size, |b, _| {
            b.iter(|| tree.iter_postorder().for_each(|value| { black_box(value); }))
        });
        group.bench_with_input(BenchmarkId::new("dyn postorder", size), size, |b, _| {
            b.iter(|| benchmark_traversal(tree.traverse(Order::Postorder)))
        });
    }
    group.finish();
}

criterion_group!(benches,
    bench_tree_insert,
    bench_traversals,
);

criterion_main!(benches);
