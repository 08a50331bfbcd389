use anyhow::Result;
use serde_json::json;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::DependencyGraph;

/// JSON formatter optimized for LLM consumption with minimal tokens
pub struct JsonCompactFormatter {
    /// Include full metadata or just essential information
    minimal: bool,
}

impl JsonCompactFormatter {
    pub fn new() -> Self {
        Self { minimal: true }
    }

    #[allow(dead_code)]
    pub fn full(mut self) -> Self {
        self.minimal = false;
        self
    }

    pub fn format_to_file(&self, graph: &dyn DependencyGraph, output_path: &Path) -> Result<()> {
        let json_content = self.format_graph(graph)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &dyn DependencyGraph) -> Result<String> {
        let mut ids = graph.all_nodes();
        ids.sort();

        // Stable index mapping keeps edge pairs compact
        let mut node_id_map = HashMap::new();
        let mut nodes = Vec::new();
        for (idx, id) in ids.iter().enumerate() {
            node_id_map.insert(id.as_str(), idx);

            let node_json = if self.minimal {
                json!({
                    "n": id,
                    "c": graph.import_count(id)
                })
            } else {
                let mut targets = graph.adjacent_nodes(id);
                targets.sort();
                json!({
                    "id": id,
                    "imported_by": graph.import_count(id),
                    "imports": targets
                })
            };

            nodes.push(node_json);
        }

        let mut edges = Vec::new();
        for id in &ids {
            let src = node_id_map[id.as_str()];
            let mut targets = graph.adjacent_nodes(id);
            targets.sort();
            for target in targets {
                if let Some(&tgt) = node_id_map.get(target.as_str()) {
                    edges.push(json!([src, tgt]));
                }
            }
        }

        let output = json!({
            "meta": {
                "nodes": ids.len(),
                "edges": edges.len(),
                "format": if self.minimal { "compact" } else { "full" }
            },
            "nodes": nodes,
            "edges": edges
        });

        Ok(serde_json::to_string(&output)?)
    }
}

impl Default for JsonCompactFormatter {
    fn default() -> Self {
        Self::new()
    }
}
