//! Benchmarks for stagehand-core materialization.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use stagehand_core::MaterializeOptions;
use stagehand_core::NoopProgress;
use stagehand_core::SpoolMode;
use stagehand_core::materialize_with_options;
use stagehand_core::test_utils::ZipTestBuilder;
use stagehand_core::test_utils::write_archive;
use std::hint::black_box;
use tempfile::TempDir;

/// Creates a jar with `file_count` small files spread over a few directories.
fn many_small_files_jar(file_count: usize) -> Vec<u8> {
    (0..file_count)
        .fold(ZipTestBuilder::new(), |builder, i| {
            let name = format!("static/dir{}/file{i:04}.txt", i % 8);
            builder.add_deflated_file(&name, format!("content{i}").as_bytes())
        })
        .build()
}

/// Creates a jar with a single large stored file.
fn large_file_jar(size_bytes: usize) -> Vec<u8> {
    ZipTestBuilder::new()
        .add_file("static/large.bin", &vec![0xAB_u8; size_bytes])
        .build()
}

fn bench_modes(c: &mut Criterion, group_name: &str, data: &[u8], throughput: Throughput) {
    let temp = TempDir::new().unwrap();
    let jar = write_archive(temp.path(), "bench.jar", data);
    let mut group = c.benchmark_group(group_name);
    group.throughput(throughput);

    for (label, mode) in [("direct", SpoolMode::Direct), ("spooled", SpoolMode::TempFile)] {
        let options = MaterializeOptions::default().with_spool(mode);
        group.bench_with_input(BenchmarkId::from_parameter(label), &options, |b, options| {
            b.iter(|| {
                let out = TempDir::new().unwrap();
                let report = materialize_with_options(
                    &jar,
                    "/static",
                    out.path(),
                    options,
                    &mut NoopProgress,
                )
                .unwrap();
                black_box(report.files_written);
            });
        });
    }

    group.finish();
}

fn bench_many_small_files(c: &mut Criterion) {
    let count = 500;
    bench_modes(
        c,
        "materialize_small_files",
        &many_small_files_jar(count),
        Throughput::Elements(count as u64),
    );
}

fn bench_large_file(c: &mut Criterion) {
    let size = 8 * 1024 * 1024;
    bench_modes(
        c,
        "materialize_large_file",
        &large_file_jar(size),
        Throughput::Bytes(size as u64),
    );
}

criterion_group!(benches, bench_many_small_files, bench_large_file);
criterion_main!(benches);
