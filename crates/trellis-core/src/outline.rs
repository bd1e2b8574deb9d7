//! Plain-text outline of a form tree for diagnostics

use std::fmt::Write;

use crate::model::{FormState, NodeId};

/// Render the tree as an indented outline, one node per line: kind, label
/// (when present), and id. Children ids that resolve to no node are shown
/// explicitly rather than skipped.
pub fn render_outline(state: &FormState) -> String {
    let mut out = String::new();
    render_node(state, &state.root_id, 0, &mut out);
    out
}

fn render_node(state: &FormState, id: &NodeId, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let Some(node) = state.nodes.get(id) else {
        let _ = writeln!(out, "{indent}<missing: {id}>");
        return;
    };
    match node.label.as_deref() {
        Some(label) if !label.is_empty() => {
            let _ = writeln!(out, "{indent}{} \"{label}\" ({id})", node.kind);
        }
        _ => {
            let _ = writeln!(out, "{indent}{} ({id})", node.kind);
        }
    }
    if let Some(children) = &node.children {
        for child in children {
            render_node(state, child, depth + 1, out);
        }
    }
}
