//! Atomic tree mutations: add, remove, update, move

use thiserror::Error;

use crate::model::{DefaultValue, FormNode, JsonMap, NodeId, NodeKind, SelectOption};
use crate::store::FormStore;

/// Why a mutation was rejected. A rejected mutation leaves the store
/// untouched; callers wanting silent no-op semantics simply discard the
/// error (the drag session does exactly that).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MutationError {
    /// The named id does not resolve to any node in the store.
    #[error("node `{0}` does not exist")]
    NotFound(NodeId),
    /// The named node cannot serve as the target of this operation —
    /// not a container, or inside the moved node's own subtree.
    #[error("node `{0}` is not a valid target")]
    InvalidTarget(NodeId),
    /// The root container can never be removed or re-parented.
    #[error("the root node is immutable")]
    RootImmutable,
}

/// Caller-supplied fields for a new node. Anything left `None` falls back to
/// the defaults: `input` kind, no label, no attributes.
#[derive(Debug, Clone, Default)]
pub struct NodeDraft {
    pub kind: Option<NodeKind>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub default_value: Option<DefaultValue>,
    pub options: Option<Vec<SelectOption>>,
    pub style: Option<JsonMap>,
    pub props: Option<JsonMap>,
}

impl NodeDraft {
    pub fn of_kind(kind: NodeKind) -> Self {
        NodeDraft {
            kind: Some(kind),
            ..Default::default()
        }
    }
}

/// Shallow property patch; only supplied fields are touched. `id`, `kind`,
/// and `children` presence are never affected.
#[derive(Debug, Clone, Default)]
pub struct NodePatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub required: Option<bool>,
    pub default_value: Option<DefaultValue>,
    pub options: Option<Vec<SelectOption>>,
    pub style: Option<JsonMap>,
    pub props: Option<JsonMap>,
}

impl FormStore {
    /// Create a node under `parent` at `index` (clamped into range, appended
    /// when omitted). Explicit draft fields win over the defaults. Nothing is
    /// created unless the parent resolves to a container, so a rejected add
    /// leaves no orphan behind.
    pub fn add_node(
        &mut self,
        parent: &NodeId,
        draft: NodeDraft,
        index: Option<usize>,
    ) -> Result<NodeId, MutationError> {
        match self.get(parent) {
            None => return Err(MutationError::NotFound(parent.clone())),
            Some(node) if node.children.is_none() => {
                return Err(MutationError::InvalidTarget(parent.clone()));
            }
            Some(_) => {}
        }

        let kind = draft.kind.unwrap_or(NodeKind::Input);
        let id = self.generate_id();
        let mut node = FormNode::new(id.clone(), kind);
        node.label = draft.label;
        node.placeholder = draft.placeholder;
        node.required = draft.required;
        node.default_value = draft.default_value;
        node.options = draft.options;
        node.style = draft.style;
        node.props = draft.props;
        self.state.nodes.insert(id.clone(), node);

        if let Some(children) = self
            .state
            .nodes
            .get_mut(parent)
            .and_then(|n| n.children.as_mut())
        {
            let at = index.unwrap_or(children.len()).min(children.len());
            children.insert(at, id.clone());
        }
        self.parent_index.insert(id.clone(), parent.clone());

        tracing::debug!(%id, parent = %parent, kind = %kind, "node added");
        Ok(id)
    }

    /// Delete `id` and its whole subtree. Returns the removed ids. Clears
    /// the selection when it pointed anywhere inside the removed subtree.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<Vec<NodeId>, MutationError> {
        if *id == self.state.root_id {
            return Err(MutationError::RootImmutable);
        }
        if !self.contains(id) {
            return Err(MutationError::NotFound(id.clone()));
        }

        // Detach from the current parent's child list.
        if let Some(parent) = self.parent_index.get(id).cloned() {
            if let Some(children) = self
                .state
                .nodes
                .get_mut(&parent)
                .and_then(|n| n.children.as_mut())
            {
                children.retain(|c| c != id);
            }
        }

        // Delete the subtree.
        let mut removed = Vec::new();
        let mut stack = vec![id.clone()];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.state.nodes.remove(&current) {
                if let Some(children) = node.children {
                    stack.extend(children);
                }
            }
            self.parent_index.remove(&current);
            removed.push(current);
        }

        if self
            .state
            .selected_node_id
            .as_ref()
            .is_some_and(|s| removed.contains(s))
        {
            self.state.selected_node_id = None;
        }

        tracing::debug!(%id, count = removed.len(), "subtree removed");
        Ok(removed)
    }

    /// Shallow-merge `patch` onto the node. Absent fields are untouched.
    pub fn update_node(&mut self, id: &NodeId, patch: NodePatch) -> Result<(), MutationError> {
        let Some(node) = self.state.nodes.get_mut(id) else {
            return Err(MutationError::NotFound(id.clone()));
        };
        if let Some(label) = patch.label {
            node.label = Some(label);
        }
        if let Some(placeholder) = patch.placeholder {
            node.placeholder = Some(placeholder);
        }
        if let Some(required) = patch.required {
            node.required = Some(required);
        }
        if let Some(default_value) = patch.default_value {
            node.default_value = Some(default_value);
        }
        if let Some(options) = patch.options {
            node.options = Some(options);
        }
        if let Some(style) = patch.style {
            node.style = Some(style);
        }
        if let Some(props) = patch.props {
            node.props = Some(props);
        }
        tracing::debug!(%id, "node updated");
        Ok(())
    }

    /// Re-parent / re-order `id` so it sits under `new_parent` at
    /// `new_index`. The caller computes `new_index` against the pre-removal
    /// child sequence; when the node moves forward within its current parent
    /// the index is rebased against the shortened sequence before clamping.
    pub fn move_node(
        &mut self,
        id: &NodeId,
        new_parent: &NodeId,
        new_index: usize,
    ) -> Result<(), MutationError> {
        if *id == self.state.root_id {
            return Err(MutationError::RootImmutable);
        }
        if !self.contains(id) {
            return Err(MutationError::NotFound(id.clone()));
        }
        match self.get(new_parent) {
            None => return Err(MutationError::NotFound(new_parent.clone())),
            Some(node) if node.children.is_none() => {
                return Err(MutationError::InvalidTarget(new_parent.clone()));
            }
            Some(_) => {}
        }
        // Dropping a node into its own subtree would orphan the whole branch.
        if self.is_descendant_or_self(new_parent, id) {
            return Err(MutationError::InvalidTarget(new_parent.clone()));
        }

        let source = self.position_of(id);

        // Detach first; the insertion index below is rebased against the
        // shortened sequence.
        if let Some((source_parent, _)) = &source {
            if let Some(children) = self
                .state
                .nodes
                .get_mut(source_parent)
                .and_then(|n| n.children.as_mut())
            {
                children.retain(|c| c != id);
            }
        }

        let mut at = new_index;
        if let Some((source_parent, source_index)) = &source {
            if source_parent == new_parent && *source_index < new_index {
                at = new_index - 1;
            }
        }

        if let Some(children) = self
            .state
            .nodes
            .get_mut(new_parent)
            .and_then(|n| n.children.as_mut())
        {
            at = at.min(children.len());
            children.insert(at, id.clone());
        }
        self.parent_index.insert(id.clone(), new_parent.clone());

        tracing::debug!(%id, parent = %new_parent, index = at, "node moved");
        Ok(())
    }

    /// True when `node` is `ancestor` itself or sits anywhere below it.
    /// The walk is capped at the node count; a cyclic parent chain (possible
    /// after a trusting bulk load) counts as contained so the caller rejects.
    fn is_descendant_or_self(&self, node: &NodeId, ancestor: &NodeId) -> bool {
        let budget = self.state.nodes.len();
        let mut current = Some(node);
        let mut hops = 0usize;
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            hops += 1;
            if hops > budget {
                return true;
            }
            current = self.parent_index.get(id);
        }
        false
    }
}
