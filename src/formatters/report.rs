use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::DependencyGraph;

/// Markdown report: a flat import-count table plus per-module import
/// listings. Works against the graph's query contract only.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_to_file(&self, graph: &dyn DependencyGraph, output_path: &Path) -> Result<()> {
        let content = self.format_graph(graph);
        fs::write(output_path, content)?;
        Ok(())
    }

    pub fn format_graph(&self, graph: &dyn DependencyGraph) -> String {
        let mut nodes = graph.all_nodes();
        nodes.sort();

        let edge_total: usize = nodes.iter().map(|n| graph.adjacent_nodes(n).len()).sum();

        let mut out = String::new();
        out.push_str("# IMPORT_GRAPH\n\n");
        out.push_str(&format!(
            "Modules: {} | Import edges: {}\n\n",
            nodes.len(),
            edge_total
        ));

        out.push_str("## Most imported\n\n");
        out.push_str("| module | imported by |\n");
        out.push_str("|--------|-------------|\n");

        let mut ranked: Vec<(&String, usize)> = nodes
            .iter()
            .map(|id| (id, graph.import_count(id)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        for (id, count) in ranked.into_iter().filter(|(_, count)| *count > 0) {
            out.push_str(&format!("| {} | {} |\n", id, count));
        }

        out.push_str("\n## Imports per module\n\n");
        for id in &nodes {
            let mut targets = graph.adjacent_nodes(id);
            if targets.is_empty() {
                continue;
            }
            targets.sort();
            out.push_str(&format!("- {}: {}\n", id, targets.join(", ")));
        }

        out
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}
