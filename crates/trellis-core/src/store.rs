//! Flattened node store with a derived parent back-reference index

use std::collections::{BTreeMap, HashMap};

use crate::model::{FormNode, FormState, NodeId, NodeKind};

/// Id of the designated root container, fixed at store creation.
pub const ROOT_ID: &str = "root";

/// Owns the form tree and its structural invariants.
///
/// Nodes live in a flat map keyed by id; hierarchy is expressed through each
/// container's ordered `children` list. A derived child -> parent index is
/// kept in lockstep with every mutation so parent lookups stay O(1) and the
/// exactly-one-parent invariant stays cheap to maintain.
pub struct FormStore {
    pub(crate) state: FormState,
    pub(crate) parent_index: HashMap<NodeId, NodeId>,
    pub(crate) next_id: u64,
}

impl std::fmt::Debug for FormStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormStore")
            .field("node_count", &self.state.nodes.len())
            .field("root_id", &self.state.root_id)
            .field("selected", &self.state.selected_node_id)
            .finish()
    }
}

impl FormStore {
    /// Empty store: a root container with no children, nothing selected.
    pub fn new() -> Self {
        let root = NodeId::new(ROOT_ID);
        let mut nodes = BTreeMap::new();
        nodes.insert(root.clone(), FormNode::new(root.clone(), NodeKind::Container));
        FormStore {
            state: FormState {
                nodes,
                root_id: root,
                selected_node_id: None,
            },
            parent_index: HashMap::new(),
            next_id: 0,
        }
    }

    /// Get a node by id.
    pub fn get(&self, id: &NodeId) -> Option<&FormNode> {
        self.state.nodes.get(id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.state.nodes.contains_key(id)
    }

    pub fn root_id(&self) -> &NodeId {
        &self.state.root_id
    }

    /// Total number of nodes, root included.
    pub fn len(&self) -> usize {
        self.state.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.nodes.is_empty()
    }

    /// Read-only view of the current state — the only thing renderers and
    /// exporters observe.
    pub fn snapshot(&self) -> &FormState {
        &self.state
    }

    /// Bulk-load a complete state (sample forms, imports). The caller is
    /// responsible for supplying an invariant-satisfying state; no schema
    /// validation happens here. The parent index and id counter are rebuilt
    /// from the loaded nodes so later generated ids never collide.
    pub fn replace(&mut self, state: FormState) {
        self.state = state;
        self.rebuild_parent_index();
        self.next_id = self
            .state
            .nodes
            .keys()
            .filter_map(|id| id.as_str().strip_prefix("node-"))
            .filter_map(|n| n.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        tracing::debug!(nodes = self.state.nodes.len(), "store replaced");
    }

    /// The parent currently referencing `id`, if any.
    pub fn parent_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.parent_index.get(id)
    }

    /// The node's current (parent, index) position, if attached.
    pub fn position_of(&self, id: &NodeId) -> Option<(NodeId, usize)> {
        let parent = self.parent_index.get(id)?;
        let children = self.state.nodes.get(parent)?.children.as_ref()?;
        let index = children.iter().position(|c| c == id)?;
        Some((parent.clone(), index))
    }

    /// Select a node for the external property editor. Selecting an unknown
    /// id is ignored; `None` clears the selection.
    pub fn select(&mut self, id: Option<NodeId>) {
        match id {
            Some(id) if !self.contains(&id) => {
                tracing::debug!(%id, "ignoring selection of unknown node");
            }
            other => self.state.selected_node_id = other,
        }
    }

    pub fn selected(&self) -> Option<&NodeId> {
        self.state.selected_node_id.as_ref()
    }

    /// Root-to-node id chain joined with `/`. Recomputed from the tree on
    /// every call; paths are never stored. `None` for unknown ids and for
    /// nodes whose parent chain is cyclic (a trusting bulk load can admit
    /// one); the hop budget bounds the walk either way.
    pub fn node_path(&self, id: &NodeId) -> Option<String> {
        if !self.contains(id) {
            return None;
        }
        let budget = self.state.nodes.len();
        let mut chain: Vec<&str> = vec![id.as_str()];
        let mut current = id;
        while let Some(parent) = self.parent_index.get(current) {
            if chain.len() > budget {
                return None;
            }
            chain.push(parent.as_str());
            current = parent;
        }
        chain.reverse();
        Some(chain.join("/"))
    }

    /// Fresh id of the form `node-N`, skipping anything already in the map
    /// (imported states may carry their own `node-*` ids).
    pub(crate) fn generate_id(&mut self) -> NodeId {
        loop {
            self.next_id += 1;
            let candidate = NodeId::new(format!("node-{}", self.next_id));
            if !self.state.nodes.contains_key(&candidate) {
                return candidate;
            }
        }
    }

    pub(crate) fn rebuild_parent_index(&mut self) {
        self.parent_index.clear();
        for (id, node) in &self.state.nodes {
            if let Some(children) = &node.children {
                for child in children {
                    self.parent_index.insert(child.clone(), id.clone());
                }
            }
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
