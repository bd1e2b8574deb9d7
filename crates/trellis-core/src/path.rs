//! Slash-delimited path addressing for drop targets
//!
//! A path is the root-to-node id chain rendered as `root/row-1/col-2`.
//! Paths are purely derived — resolved against the store on demand, never
//! stored — so they cannot go stale across mutations.

use crate::model::{FormNode, NodeId};
use crate::store::FormStore;

/// Split a droppable path into its id components. Empty or malformed input
/// resolves to the single-element `[root]` chain; this never fails.
pub fn parse_path(path: &str, root: &NodeId) -> Vec<NodeId> {
    let ids: Vec<NodeId> = path
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(NodeId::from)
        .collect();
    if ids.is_empty() { vec![root.clone()] } else { ids }
}

/// Walk the path's ids through the store. Every component must be a live
/// node; the first miss yields `None`.
pub fn resolve_node<'a>(store: &'a FormStore, path: &str) -> Option<&'a FormNode> {
    let ids = parse_path(path, store.root_id());
    let mut node = None;
    for id in &ids {
        node = Some(store.get(id)?);
    }
    node
}

/// The parent a drop lands in: the last path component, root when empty.
pub fn parent_id_from_path(path: &str, root: &NodeId) -> NodeId {
    let mut ids = parse_path(path, root);
    ids.pop().unwrap_or_else(|| root.clone())
}

/// True when both paths name the same node, or `descendant` sits anywhere
/// inside `ancestor`'s subtree. Used to suppress highlighting of — and to
/// guard commits into — a dragged node's own subtree.
pub fn is_ancestor_or_equal(ancestor: &str, descendant: &str) -> bool {
    if ancestor == descendant {
        return true;
    }
    descendant
        .strip_prefix(ancestor)
        .is_some_and(|rest| rest.starts_with('/'))
}
