//! Benchmark for `.osu` file parsing.

use criterion::{Criterion, Throughput};
use osu_rs::osu::{lex::TokenStream, parse_osu};

struct OsuFile {
    name: String,
    source: String,
}

fn scan_osu_files() -> Vec<OsuFile> {
    let dir = "tests/files";

    std::fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "osu"))
        .filter_map(|path| {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(String::from)?;

            let source = std::fs::read_to_string(&path).expect("Failed to load test file");

            Some(OsuFile { name, source })
        })
        .collect()
}

fn bench_parse_osu(c: &mut Criterion) {
    let files = scan_osu_files();
    let mut group = c.benchmark_group("parse_osu");

    for file in &files {
        group.throughput(Throughput::Bytes(file.source.len() as u64));
        group.bench_function(format!("{}/lex", file.name), |b| {
            b.iter(|| TokenStream::parse_lex(std::hint::black_box(&file.source)));
        });
        group.bench_function(&file.name, |b| {
            b.iter(|| parse_osu(std::hint::black_box(&file.source)));
        });
    }

    group.finish();
}

fn main() {
    let mut criterion = Criterion::default();
    bench_parse_osu(&mut criterion);
}
