use std::fs;
use tracery::core::{CodebaseAnalyzer, DependencyGraph};

#[test]
fn analyzer_end_to_end_on_small_odin_tree() {
    let dir = tempfile::TempDir::new().unwrap();
    let pkg = dir.path().join("pkg");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("a.odin"), "package pkg\n\nimport \"pkg/b\"\n").unwrap();
    fs::write(pkg.join("b.odin"), "package pkg\n").unwrap();

    let mut analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze(dir.path(), &["odin"]).unwrap();

    // edges run importer -> imported
    assert_eq!(graph.adjacent_nodes("pkg/a"), vec!["pkg/b".to_string()]);
    assert!(graph.adjacent_nodes("pkg/b").is_empty());
    assert_eq!(graph.import_count("pkg/b"), 1);
    assert_eq!(graph.import_count("pkg/a"), 0);

    // round-trip: scanned files plus import targets, no duplicates
    let mut nodes = graph.all_nodes();
    nodes.sort();
    assert_eq!(nodes, vec!["pkg/a".to_string(), "pkg/b".to_string()]);
}

#[test]
fn import_targets_outside_the_tree_become_nodes() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = dir.path().join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("main.odin"), "import \"core:fmt\"\n").unwrap();

    let mut analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze(dir.path(), &["odin"]).unwrap();

    assert!(graph.has_node("core:fmt"));
    assert!(graph.has_edge("app/main", "core:fmt"));
    assert_eq!(graph.import_count("core:fmt"), 1);
}

#[test]
fn zero_length_files_contribute_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = dir.path().join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("empty.odin"), "").unwrap();
    fs::write(app.join("real.odin"), "import \"lib/util\"\n").unwrap();

    let mut analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze(dir.path(), &["odin"]).unwrap();

    assert!(!graph.has_node("app/empty"));
    assert!(graph.has_node("app/real"));
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn duplicate_imports_in_one_file_count_once() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = dir.path().join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(
        app.join("x.odin"),
        "import \"lib/util\"\nimport \"lib/util\"\n",
    )
    .unwrap();
    fs::write(app.join("y.odin"), "import \"lib/util\"\n").unwrap();

    let mut analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze(dir.path(), &["odin"]).unwrap();

    // x counts once despite the duplicate, y adds the second reference
    assert_eq!(graph.import_count("lib/util"), 2);
    assert_eq!(graph.adjacent_nodes("app/x"), vec!["lib/util".to_string()]);
}

#[test]
fn unterminated_marker_does_not_abort_the_build() {
    let dir = tempfile::TempDir::new().unwrap();
    let app = dir.path().join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("bad.odin"), "import \"pkg/one\"\nimport \"trunc").unwrap();
    fs::write(app.join("ok.odin"), "import \"pkg/one\"\n").unwrap();

    let mut analyzer = CodebaseAnalyzer::new();
    let graph = analyzer.analyze(dir.path(), &["odin"]).unwrap();

    // imports yielded before the malformed marker are kept
    assert!(graph.has_edge("app/bad", "pkg/one"));
    assert!(graph.has_edge("app/ok", "pkg/one"));
    assert_eq!(graph.import_count("pkg/one"), 2);
}

#[test]
fn missing_root_is_fatal() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("absent");

    let mut analyzer = CodebaseAnalyzer::new();
    assert!(analyzer.analyze(&missing, &["odin"]).is_err());
}
