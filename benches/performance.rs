use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tracery::core::CodebaseAnalyzer;

fn benchmark_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_construction");

    // Create a synthetic odin tree
    let test_dir = std::env::temp_dir().join("tracery_bench");
    std::fs::create_dir_all(test_dir.join("app")).unwrap();

    for i in 0..100 {
        let content = format!(
            "package app\n\nimport \"core:fmt\"\nimport \"app/mod_{}\"\n",
            (i + 1) % 100
        );
        std::fs::write(
            test_dir.join("app").join(format!("mod_{}.odin", i)),
            content,
        )
        .unwrap();
    }

    group.bench_function("odin_tree_100_files", |b| {
        b.iter(|| {
            let mut analyzer = CodebaseAnalyzer::new();
            let result = analyzer.analyze(black_box(&test_dir), black_box(&["odin"]));
            black_box(result)
        });
    });

    group.finish();
}

fn benchmark_cache_performance(c: &mut Criterion) {
    use tempfile::TempDir;
    use tracery::extract::cache::ExtractCache;

    let mut group = c.benchmark_group("cache_performance");

    let test_dir = TempDir::new().unwrap();
    let test_file = test_dir.path().join("main.odin");
    std::fs::write(&test_file, "import \"core:fmt\"\n").unwrap();

    group.bench_function("cache_store_and_retrieve", |b| {
        b.iter(|| {
            let cache = ExtractCache::new(None).unwrap();

            let needs_update = cache.needs_update(black_box(&test_file)).unwrap();
            black_box(needs_update);

            cache
                .store(black_box(&test_file), &["core:fmt".to_string()])
                .unwrap();
            let cached = cache.get(black_box(&test_file));
            black_box(cached);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_analysis, benchmark_cache_performance);
criterion_main!(benches);
