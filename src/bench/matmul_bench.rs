use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use matmul_cache::{
    Layout, Matrix, ShortCircuit, matmult, matmult_cm, matmult_li, matmult_tiled, transpose,
    transpose_li, transpose_tiled,
};

const SIZES: [usize; 3] = [64, 128, 256];
const BLOCKS: [usize; 3] = [8, 16, 32];

fn bench_matmult(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmult");
    for &n in &SIZES {
        let a = Matrix::sequential(n).unwrap();
        let b = Matrix::sequential(n).unwrap();
        let mut b_t = Matrix::zeros(n, Layout::RowMajor).unwrap();
        transpose(&b, &mut b_t).unwrap();
        let mut out = Matrix::zeros(n, Layout::RowMajor).unwrap();

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, _| {
            bench.iter(|| {
                out.zero();
                matmult(&a, &b, &mut out).unwrap();
            });
        });
        group.bench_with_input(BenchmarkId::new("realigned", n), &n, |bench, _| {
            bench.iter(|| {
                out.zero();
                matmult_cm(&a, &b_t, &mut out).unwrap();
            });
        });
        group.bench_with_input(BenchmarkId::new("interchange", n), &n, |bench, _| {
            bench.iter(|| {
                out.zero();
                matmult_li(&a, &b, &mut out).unwrap();
            });
        });
        for &block in &BLOCKS {
            let id = BenchmarkId::new(format!("blocked_{}", block), n);
            group.bench_with_input(id, &n, |bench, _| {
                let mut probe = ShortCircuit::disabled();
                bench.iter(|| {
                    out.zero();
                    matmult_tiled(&a, &b, &mut out, block, &mut probe).unwrap();
                });
            });
        }
    }
    group.finish();
}

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");
    for &n in &[256, 1024, 2048] {
        let m = Matrix::sequential(n).unwrap();
        let mut m_t = Matrix::zeros(n, Layout::RowMajor).unwrap();

        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bench, _| {
            bench.iter(|| transpose(&m, &mut m_t).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("interchange", n), &n, |bench, _| {
            bench.iter(|| transpose_li(&m, &mut m_t).unwrap());
        });
        for &block in &BLOCKS {
            let id = BenchmarkId::new(format!("blocked_{}", block), n);
            group.bench_with_input(id, &n, |bench, _| {
                let mut probe = ShortCircuit::disabled();
                bench.iter(|| transpose_tiled(&m, &mut m_t, block, &mut probe).unwrap());
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_matmult, bench_transpose);
criterion_main!(benches);
