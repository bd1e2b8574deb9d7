//! Test helpers for building stores

use crate::model::{NodeId, NodeKind};
use crate::mutation::NodeDraft;
use crate::store::FormStore;

/// Store whose root holds one child per given kind, in order.
pub fn store_with_children(kinds: &[NodeKind]) -> (FormStore, Vec<NodeId>) {
    let mut store = FormStore::new();
    let root = store.root_id().clone();
    let ids = kinds
        .iter()
        .map(|kind| store.add_node(&root, NodeDraft::of_kind(*kind), None).unwrap())
        .collect();
    (store, ids)
}

/// Store shaped `root -> row -> [input, input]`.
/// Returns (store, row id, input ids).
pub fn store_with_row() -> (FormStore, NodeId, Vec<NodeId>) {
    let mut store = FormStore::new();
    let root = store.root_id().clone();
    let row = store
        .add_node(&root, NodeDraft::of_kind(NodeKind::Row), None)
        .unwrap();
    let inputs = (0..2)
        .map(|_| {
            store
                .add_node(&row, NodeDraft::of_kind(NodeKind::Input), None)
                .unwrap()
        })
        .collect();
    (store, row, inputs)
}

/// Ordered child ids of `parent`, panicking when it is not a container.
pub fn children_of(store: &FormStore, parent: &NodeId) -> Vec<NodeId> {
    store
        .get(parent)
        .and_then(|n| n.children.clone())
        .unwrap_or_else(|| panic!("`{parent}` has no children list"))
}
