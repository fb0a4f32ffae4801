use std::collections::BTreeMap;
use std::fmt;
use crate::error::{FixtureError, Result};
use crate::issues::issues_for;

/// Name of a fixture function
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(String);

impl FunctionId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        FunctionId(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Node in the call graph representing a fixture function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: FunctionId,
    /// True when the issue catalogue lists a flaw in this function
    pub has_known_issues: bool,
}

impl GraphNode {
    #[must_use]
    pub fn new(id: FunctionId, has_known_issues: bool) -> Self {
        GraphNode { id, has_known_issues }
    }

    /// Node whose issue flag is looked up in the catalogue
    #[must_use]
    pub fn catalogued(name: &str) -> Self {
        let has_known_issues = !issues_for(name).is_empty();
        GraphNode::new(FunctionId::new(name), has_known_issues)
    }
}

/// Call from one function to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: FunctionId,
    pub to: FunctionId,
    /// 1-based position of the call among the caller's calls
    pub call_site: usize,
}

impl GraphEdge {
    #[must_use]
    pub fn new(from: FunctionId, to: FunctionId, call_site: usize) -> Self {
        GraphEdge { from, to, call_site }
    }
}

#[derive(Debug, Clone)]
pub struct CallGraph {
    pub nodes: BTreeMap<FunctionId, GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CallGraph {
    #[must_use]
    pub fn new() -> Self {
        CallGraph {
            nodes: BTreeMap::new(),
            edges: vec![],
        }
    }

    /// Insert a node into the graph
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::DuplicateNode`] if the node already exists.
    pub fn insert_node(&mut self, node: GraphNode) -> Result<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(FixtureError::DuplicateNode(node.id.to_string()));
        }
        self.nodes.insert(node.id.clone(), node);
        Ok(())
    }

    /// Insert an edge into the graph
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::UnknownNode`] if either endpoint is missing.
    pub fn insert_edge(&mut self, edge: GraphEdge) -> Result<()> {
        for endpoint in [&edge.from, &edge.to] {
            if !self.nodes.contains_key(endpoint) {
                return Err(FixtureError::UnknownNode(endpoint.to_string()));
            }
        }
        self.edges.push(edge);
        Ok(())
    }

    #[must_use]
    pub fn get_node(&self, id: &FunctionId) -> Option<&GraphNode> {
        self.nodes.get(id)
    }

    /// Functions called by `id`, in call-site order, repeats included
    #[must_use]
    pub fn callees(&self, id: &FunctionId) -> Vec<&FunctionId> {
        let mut edges: Vec<&GraphEdge> = self.edges.iter().filter(|e| e.from == *id).collect();
        edges.sort_by_key(|e| e.call_site);
        edges.into_iter().map(|e| &e.to).collect()
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Default for CallGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Static call graph of the fixture: `main` and the functions it exercises.
///
/// # Errors
///
/// Only fails if the fixed node and edge lists are inconsistent.
pub fn fixture_call_graph() -> Result<CallGraph> {
    const CALLS: &[(&str, &str)] = &[
        ("main", "calculate_fibonacci"),
        ("main", "process_user_data"),
        ("main", "divide_numbers"),
        ("main", "divide_numbers"),
        ("calculate_fibonacci", "calculate_fibonacci"),
        ("calculate_fibonacci", "calculate_fibonacci"),
    ];

    let mut graph = CallGraph::new();
    for name in ["main", "calculate_fibonacci", "process_user_data", "divide_numbers"] {
        graph.insert_node(GraphNode::catalogued(name))?;
    }

    let mut site_counter: BTreeMap<&str, usize> = BTreeMap::new();
    for &(from, to) in CALLS {
        let site = site_counter.entry(from).or_insert(0);
        *site += 1;
        graph.insert_edge(GraphEdge::new(FunctionId::new(from), FunctionId::new(to), *site))?;
    }

    log::debug!(
        "fixture call graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}
