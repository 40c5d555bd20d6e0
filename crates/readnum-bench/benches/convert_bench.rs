//! Conversion scanner and retry loop benchmarks.

use std::io::Cursor;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use readnum_bench::garbage_then_valid;
use readnum_core::convert::{scan_float, scan_signed};
use readnum_core::read_scalar_from;

fn bench_scan_signed(c: &mut Criterion) {
    let inputs: &[&[u8]] = &[b"7", b"123456789", b"0xdeadbeef", b"-170141183460469231731687303715884105728"];
    let mut group = c.benchmark_group("scan_signed");

    for input in inputs {
        group.bench_with_input(
            BenchmarkId::from_parameter(String::from_utf8_lossy(input)),
            input,
            |b, input| {
                b.iter(|| black_box(scan_signed(input, 0)));
            },
        );
    }
    group.finish();
}

fn bench_scan_float(c: &mut Criterion) {
    let inputs: &[&[u8]] = &[b"2.5", b"-1.25e10", b"3.14159265358979"];
    let mut group = c.benchmark_group("scan_float");

    for input in inputs {
        group.bench_with_input(
            BenchmarkId::from_parameter(String::from_utf8_lossy(input)),
            input,
            |b, input| {
                b.iter(|| black_box(scan_float(input)));
            },
        );
    }
    group.finish();
}

fn bench_retry_loop(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096];
    let mut group = c.benchmark_group("read_scalar_retry");

    for &size in sizes {
        let data = garbage_then_valid(size);
        group.bench_with_input(BenchmarkId::new("garbage_line", size), &data, |b, data| {
            b.iter(|| {
                let mut stream = Cursor::new(data.as_slice());
                let mut diag = Vec::new();
                let val: i64 = read_scalar_from(&mut stream, &mut diag);
                black_box(val);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scan_signed, bench_scan_float, bench_retry_loop);
criterion_main!(benches);
