use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use tmatrix::{CsrMatrix, DynamicVector, GeneralBandMatrix};

fn make_random_band(n: usize, bandwidth: usize, seed: u64) -> GeneralBandMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = GeneralBandMatrix::new(n, bandwidth, bandwidth).unwrap();
    for i in 0..n {
        let first = i.saturating_sub(bandwidth);
        let last = (i + bandwidth).min(n - 1);
        for j in first..=last {
            m.set(i, j, rng.gen_range(-1.0..1.0)).unwrap();
        }
    }
    m
}

fn bench_band_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_multiply");
    for size in [64usize, 128, 256] {
        let bandwidth = 3;
        group.throughput(Throughput::Elements((size * size) as u64));

        let a = make_random_band(size, bandwidth, 0);
        let b = make_random_band(size, bandwidth, 1);
        let a_dense = a.to_dense();
        let b_dense = b.to_dense();

        group.bench_with_input(BenchmarkId::new("dense", size), &size, |bench, _| {
            bench.iter(|| match a_dense.multiply(&b_dense) {
                Ok(out) => out,
                Err(err) => panic!("dense multiply failed: {err}"),
            })
        });

        group.bench_with_input(BenchmarkId::new("band", size), &size, |bench, _| {
            bench.iter(|| match a.multiply(&b) {
                Ok(out) => out,
                Err(err) => panic!("band multiply failed: {err}"),
            })
        });
    }
    group.finish();
}

fn bench_mul_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul_vector");
    for size in [256usize, 1024] {
        let a = make_random_band(size, 4, 2);
        let a_dense = a.to_dense();
        let a_sparse = CsrMatrix::from_dense(&a_dense).unwrap();
        let v = DynamicVector::filled(size, 1.0).unwrap();

        group.bench_with_input(BenchmarkId::new("dense", size), &size, |bench, _| {
            bench.iter(|| a_dense.mul_vector(&v).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("band", size), &size, |bench, _| {
            bench.iter(|| a.mul_vector(&v).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("csr", size), &size, |bench, _| {
            bench.iter(|| a_sparse.mul_vector(&v).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_band_multiply, bench_mul_vector);
criterion_main!(benches);
