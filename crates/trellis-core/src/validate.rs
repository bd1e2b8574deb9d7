//! Structural invariant checks over a form state
//!
//! Bulk loads are trusted (`FormStore::replace` performs no validation), so
//! this is the on-demand check: the CLI runs it over imported documents and
//! the test suite runs it after every mutation.

use std::collections::HashMap;
use std::fmt;

use crate::model::{FormState, NodeId};

/// One breached invariant, reported by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A children list references an id missing from the node map.
    DanglingChild { parent: NodeId, child: NodeId },
    /// A node is referenced by more than one parent (or twice by one).
    MultipleParents { node: NodeId },
    /// A non-root node is referenced by no parent at all.
    Orphan { node: NodeId },
    /// A leaf-kind node carries a children list.
    LeafWithChildren { node: NodeId },
    /// A containment cycle — the node is its own ancestor.
    Cycle { node: NodeId },
    /// The declared root id is missing from the node map.
    MissingRoot { root: NodeId },
    /// The root id appears in some children list.
    RootAttached,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::DanglingChild { parent, child } => {
                write!(f, "`{parent}` references missing child `{child}`")
            }
            Violation::MultipleParents { node } => {
                write!(f, "`{node}` is referenced by more than one parent")
            }
            Violation::Orphan { node } => write!(f, "`{node}` is attached to no parent"),
            Violation::LeafWithChildren { node } => {
                write!(f, "leaf node `{node}` carries a children list")
            }
            Violation::Cycle { node } => write!(f, "`{node}` is its own ancestor"),
            Violation::MissingRoot { root } => write!(f, "root `{root}` is not in the node map"),
            Violation::RootAttached => write!(f, "the root node appears in a children list"),
        }
    }
}

/// Check the tree invariants over a snapshot. An empty result means the
/// state is structurally sound.
pub fn validate(state: &FormState) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !state.nodes.contains_key(&state.root_id) {
        violations.push(Violation::MissingRoot {
            root: state.root_id.clone(),
        });
    }

    // Count parent references and collect the child -> parent relation.
    let mut parent_refs: HashMap<&NodeId, usize> = HashMap::new();
    let mut parent_of: HashMap<&NodeId, &NodeId> = HashMap::new();
    for (id, node) in &state.nodes {
        let Some(children) = &node.children else {
            continue;
        };
        if !node.kind.is_container() {
            violations.push(Violation::LeafWithChildren { node: id.clone() });
        }
        for child in children {
            if !state.nodes.contains_key(child) {
                violations.push(Violation::DanglingChild {
                    parent: id.clone(),
                    child: child.clone(),
                });
            }
            *parent_refs.entry(child).or_insert(0) += 1;
            parent_of.insert(child, id);
        }
    }

    // Exactly-one-parent for everything but the root.
    for id in state.nodes.keys() {
        if *id == state.root_id {
            if parent_refs.contains_key(id) {
                violations.push(Violation::RootAttached);
            }
            continue;
        }
        match parent_refs.get(id).copied().unwrap_or(0) {
            0 => violations.push(Violation::Orphan { node: id.clone() }),
            1 => {}
            _ => violations.push(Violation::MultipleParents { node: id.clone() }),
        }
    }

    // No node may be its own ancestor. The hop budget bounds the walk even
    // when the parent relation itself is inconsistent.
    for id in state.nodes.keys() {
        let mut current = id;
        let mut hops = 0usize;
        while let Some(parent) = parent_of.get(current).copied() {
            current = parent;
            hops += 1;
            if current == id || hops > state.nodes.len() {
                violations.push(Violation::Cycle { node: id.clone() });
                break;
            }
        }
    }

    violations
}
