use crate::graph::CallGraph;
use std::fmt::Write as _;

/// Generate Graphviz DOT format for the call graph
#[must_use]
pub fn to_dot(graph: &CallGraph) -> String {
    let mut output = String::new();
    output.push_str("digraph CallGraph {\n");
    output.push_str("    rankdir=LR;\n");
    output.push_str("    node [shape=box];\n\n");

    for (id, node) in &graph.nodes {
        let fill = if node.has_known_issues {
            "lightsalmon"
        } else {
            "lightblue"
        };
        let _ = writeln!(
            output,
            "    \"{id}\" [style=filled, fillcolor={fill}];"
        );
    }

    output.push('\n');

    for edge in &graph.edges {
        let _ = writeln!(
            output,
            "    \"{}\" -> \"{}\" [label=\"#{}\"];",
            edge.from, edge.to, edge.call_site
        );
    }

    output.push_str("}\n");
    output
}
