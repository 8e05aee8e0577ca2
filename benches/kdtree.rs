use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kd_pointset::{BruteForcePointSet, KdTree, Point2D, PointSet, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstar::RTree;

const NUM_POINTS: usize = 10_000;

fn load_points() -> Vec<Point2D<f64>> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..NUM_POINTS)
        .map(|_| Point2D::new(rng.gen::<f64>(), rng.gen::<f64>()))
        .collect()
}

fn construct_kdtree(points: &[Point2D<f64>]) -> KdTree<f64> {
    let mut tree = KdTree::new();
    tree.insert_all(points.iter().copied()).unwrap();
    tree
}

fn construct_brute_force(points: &[Point2D<f64>]) -> BruteForcePointSet<f64> {
    let mut set = BruteForcePointSet::new();
    set.insert_all(points.iter().copied()).unwrap();
    set
}

fn construct_rstar(points: &[Point2D<f64>]) -> RTree<[f64; 2]> {
    RTree::bulk_load(points.iter().map(|p| [p.x(), p.y()]).collect())
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = load_points();

    c.bench_function("construction (kdtree)", |b| {
        b.iter(|| construct_kdtree(&points))
    });

    c.bench_function("construction (brute force)", |b| {
        b.iter(|| construct_brute_force(&points))
    });

    c.bench_function("construction (rstar bulk)", |b| {
        b.iter(|| construct_rstar(&points))
    });

    let kdtree = construct_kdtree(&points);
    let brute_force = construct_brute_force(&points);
    let rstar_tree = construct_rstar(&points);

    let rect = Rect::new(0.4, 0.4, 0.45, 0.45);

    c.bench_function("range (kdtree)", |b| b.iter(|| kdtree.range(&rect)));

    c.bench_function("range (brute force)", |b| {
        b.iter(|| brute_force.range(&rect))
    });

    let query = Point2D::new(0.5, 0.5);

    c.bench_function("nearest (kdtree)", |b| b.iter(|| kdtree.nearest(&query)));

    c.bench_function("nearest (brute force)", |b| {
        b.iter(|| brute_force.nearest(&query))
    });

    c.bench_function("nearest (rstar)", |b| {
        b.iter(|| rstar_tree.nearest_neighbor(&[query.x(), query.y()]).copied())
    });

    // Sorted input degenerates the tree into a list
    let mut sorted = points.clone();
    sorted.sort();
    c.bench_function("construction (kdtree, sorted input)", |b| {
        b.iter_batched(
            || sorted[..1000].to_vec(),
            |points| construct_kdtree(&points),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
