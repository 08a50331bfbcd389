use std::fs;
use tracery::core::{DependencyGraph, ImportGraph};
use tracery::formatters::JsonCompactFormatter;

#[test]
fn compact_json_has_meta_nodes_and_edges() {
    let mut g = ImportGraph::new();
    g.add_edge("app/main", "core:fmt");
    g.add_edge("app/main", "lib/util");
    g.add_edge("lib/util", "core:fmt");

    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("graph.json");
    JsonCompactFormatter::new().format_to_file(&g, &out).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(parsed["meta"]["nodes"], 3);
    assert_eq!(parsed["meta"]["edges"], 3);

    // nodes are sorted by id; core:fmt is imported by two distinct modules
    let nodes = parsed["nodes"].as_array().unwrap();
    assert_eq!(nodes[0]["n"], "app/main");
    assert_eq!(nodes[1]["n"], "core:fmt");
    assert_eq!(nodes[1]["c"], 2);

    let edges = parsed["edges"].as_array().unwrap();
    assert_eq!(edges.len(), 3);
}

#[test]
fn full_format_lists_import_targets() {
    let mut g = ImportGraph::new();
    g.add_edge("app/main", "lib/util");

    let json = JsonCompactFormatter::new().full().format_graph(&g).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["meta"]["format"], "full");
    assert_eq!(parsed["nodes"][0]["imports"][0], "lib/util");
}
