use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;
use std::collections::HashMap;

/// The query/mutation contract of the import graph.
///
/// Consumers of a finished graph — formatters here, any visualization layer
/// elsewhere — are written against this trait alone and never see the
/// concrete representation.
///
/// Direction convention: an edge runs from the importing file to the
/// imported module. `adjacent_nodes(file)` is what the file imports;
/// `import_count(module)` is the number of distinct files importing it.
pub trait DependencyGraph {
    /// Idempotent: creates an isolated node with a zero in-reference
    /// counter, no-op if the node already exists.
    fn add_node(&mut self, id: &str);

    /// Ensures both endpoints exist and inserts the edge if absent. The
    /// target's in-reference counter increments only on first insertion of
    /// that exact edge; repeated calls change nothing.
    fn add_edge(&mut self, from: &str, to: &str);

    /// Removes the node, its outgoing edges, and its membership in every
    /// other node's adjacency. Counters of other nodes are not rebalanced.
    fn remove_node(&mut self, id: &str);

    /// Removes the adjacency entry only; counters are untouched.
    fn remove_edge(&mut self, from: &str, to: &str);

    /// Stored in-reference counter; 0 for unknown nodes, never fails.
    fn import_count(&self, id: &str) -> usize;

    /// Outgoing neighbors; empty for unknown nodes.
    fn adjacent_nodes(&self, id: &str) -> Vec<String>;

    fn all_nodes(&self) -> Vec<String>;

    fn has_node(&self, id: &str) -> bool;

    fn has_edge(&self, from: &str, to: &str) -> bool;
}

/// Directed import graph keyed by normalized node identity.
///
/// A stable petgraph holds the adjacency so node removal never invalidates
/// the id index. The in-reference counters live in a separate table because
/// the removal operations are specified as structural edits that leave
/// counters alone.
pub struct ImportGraph {
    graph: StableDiGraph<String, ()>,
    node_index: HashMap<String, NodeIndex>,
    import_counts: HashMap<String, usize>,
}

impl ImportGraph {
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            node_index: HashMap::new(),
            import_counts: HashMap::new(),
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn ensure_node(&mut self, id: &str) -> NodeIndex {
        debug_assert!(!id.is_empty(), "normalization never yields an empty id");
        if let Some(&idx) = self.node_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.node_index.insert(id.to_string(), idx);
        self.import_counts.insert(id.to_string(), 0);
        idx
    }
}

impl DependencyGraph for ImportGraph {
    fn add_node(&mut self, id: &str) {
        self.ensure_node(id);
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        let from_idx = self.ensure_node(from);
        let to_idx = self.ensure_node(to);

        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, ());
            if let Some(count) = self.import_counts.get_mut(to) {
                *count += 1;
            }
        }
    }

    fn remove_node(&mut self, id: &str) {
        if let Some(idx) = self.node_index.remove(id) {
            self.graph.remove_node(idx);
            self.import_counts.remove(id);
        }
    }

    fn remove_edge(&mut self, from: &str, to: &str) {
        let (Some(&from_idx), Some(&to_idx)) =
            (self.node_index.get(from), self.node_index.get(to))
        else {
            return;
        };
        if let Some(edge) = self.graph.find_edge(from_idx, to_idx) {
            self.graph.remove_edge(edge);
        }
    }

    fn import_count(&self, id: &str) -> usize {
        self.import_counts.get(id).copied().unwrap_or(0)
    }

    fn adjacent_nodes(&self, id: &str) -> Vec<String> {
        let Some(&idx) = self.node_index.get(id) else {
            return Vec::new();
        };
        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .filter_map(|n| self.graph.node_weight(n).cloned())
            .collect()
    }

    fn all_nodes(&self) -> Vec<String> {
        self.graph.node_weights().cloned().collect()
    }

    fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_index.get(from), self.node_index.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => {
                self.graph.find_edge(from_idx, to_idx).is_some()
            }
            _ => false,
        }
    }
}

impl Default for ImportGraph {
    fn default() -> Self {
        Self::new()
    }
}
