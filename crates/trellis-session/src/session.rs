//! Drag-session state machine

use tracing::debug;
use trellis_core::{FormStore, NodeDraft, NodeId, NodeKind, path};

use crate::event::{DragOrigin, DropCandidate, SourceKind};

/// Which flavor of gesture is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    Palette,
    Canvas,
}

/// Everything recorded for one in-flight gesture.
#[derive(Debug, Clone, PartialEq)]
pub struct Gesture {
    pub kind: DragKind,
    /// Canvas drags: the node being moved. Palette drags: unset.
    pub dragging_id: Option<NodeId>,
    /// Palette drags: the component kind a commit will create.
    pub declared_kind: Option<NodeKind>,
    /// Canvas drags: the node's (parent, index) snapshotted at drag-start.
    pub source: Option<(NodeId, usize)>,
    /// Latest drag-over candidate; last write wins.
    pub destination: Option<(NodeId, usize)>,
}

/// What a finished gesture did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropEffect {
    /// A palette commit created this node.
    Added(NodeId),
    /// A canvas commit moved this node.
    Moved(NodeId),
    /// Nothing changed — no target, or the mutation was rejected.
    None,
}

/// Tracks one interactive drag gesture from start to commit or cancel.
///
/// `Idle -> Active(palette | canvas) -> Idle`, re-entrant on destination
/// updates. `end` and `cancel` always return the machine to Idle, so no
/// gesture ever leaks into the next one, and the store is never touched
/// before commit. Every commit is a single mutation call whose rejection is
/// swallowed; the session needs no error handling of its own.
#[derive(Debug, Default)]
pub struct DragSession {
    gesture: Option<Gesture>,
}

impl DragSession {
    pub fn new() -> Self {
        DragSession { gesture: None }
    }

    pub fn is_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// The in-flight gesture, for highlight rendering.
    pub fn gesture(&self) -> Option<&Gesture> {
        self.gesture.as_ref()
    }

    /// Begin a gesture. Canvas drags snapshot the node's current position at
    /// this moment; a canvas descriptor naming no live node leaves the
    /// machine Idle.
    pub fn start(&mut self, store: &FormStore, origin: DragOrigin) {
        match origin.source_kind {
            SourceKind::Palette => {
                let kind = origin.declared_kind.unwrap_or(NodeKind::Input);
                debug!(kind = %kind, "palette drag started");
                self.gesture = Some(Gesture {
                    kind: DragKind::Palette,
                    dragging_id: None,
                    declared_kind: Some(kind),
                    source: None,
                    destination: None,
                });
            }
            SourceKind::Canvas => {
                let Some(node_id) = origin.node_id else {
                    debug!("canvas drag descriptor carries no node id; staying idle");
                    return;
                };
                let Some(source) = store.position_of(&node_id) else {
                    debug!(%node_id, "canvas drag on unknown node; staying idle");
                    return;
                };
                debug!(%node_id, parent = %source.0, index = source.1, "canvas drag started");
                self.gesture = Some(Gesture {
                    kind: DragKind::Canvas,
                    dragging_id: Some(node_id),
                    declared_kind: None,
                    source: Some(source),
                    destination: None,
                });
            }
        }
    }

    /// Record the latest drag-over candidate. Unconditional overwrite; only
    /// the most recent slot matters when the gesture ends.
    pub fn drag_over(&mut self, store: &FormStore, candidate: &DropCandidate) {
        let Some(gesture) = self.gesture.as_mut() else {
            return;
        };
        let parent = path::parent_id_from_path(&candidate.target_path, store.root_id());
        gesture.destination = Some((parent, candidate.target_index));
    }

    /// Highlight guard: would dropping on `target_path` be accepted? The
    /// target must resolve to a container, and a canvas drag may not land
    /// inside the dragged node's own subtree.
    pub fn is_valid_target(&self, store: &FormStore, target_path: &str) -> bool {
        let Some(target) = path::resolve_node(store, target_path) else {
            return false;
        };
        if target.children.is_none() {
            return false;
        }
        let Some(dragging_id) = self.gesture.as_ref().and_then(|g| g.dragging_id.as_ref())
        else {
            return true;
        };
        match (store.node_path(dragging_id), store.node_path(&target.id)) {
            (Some(dragged), Some(resolved)) => !path::is_ancestor_or_equal(&dragged, &resolved),
            _ => true,
        }
    }

    /// Finish the gesture and commit at most one mutation. `candidate` is
    /// the slot under the pointer at release; when the input source reports
    /// none, the last recorded drag-over destination is used. The machine
    /// returns to Idle whatever happens.
    pub fn end(&mut self, store: &mut FormStore, candidate: Option<&DropCandidate>) -> DropEffect {
        let Some(gesture) = self.gesture.take() else {
            return DropEffect::None;
        };

        let target = match candidate {
            Some(c) => Some((
                path::parent_id_from_path(&c.target_path, store.root_id()),
                c.target_index,
            )),
            None => gesture.destination,
        };
        let Some((parent, index)) = target else {
            debug!("drag released over no target; nothing committed");
            return DropEffect::None;
        };

        match gesture.kind {
            DragKind::Palette => {
                let kind = gesture.declared_kind.unwrap_or(NodeKind::Input);
                match store.add_node(&parent, NodeDraft::of_kind(kind), Some(index)) {
                    Ok(id) => {
                        debug!(%id, parent = %parent, index, "palette drop committed");
                        DropEffect::Added(id)
                    }
                    Err(err) => {
                        debug!(%err, "palette drop rejected");
                        DropEffect::None
                    }
                }
            }
            DragKind::Canvas => {
                let Some(id) = gesture.dragging_id else {
                    return DropEffect::None;
                };
                match store.move_node(&id, &parent, index) {
                    Ok(()) => {
                        debug!(%id, parent = %parent, index, "canvas drop committed");
                        DropEffect::Moved(id)
                    }
                    Err(err) => {
                        debug!(%err, "canvas drop rejected");
                        DropEffect::None
                    }
                }
            }
        }
    }

    /// Abort without committing; every recorded field is discarded.
    pub fn cancel(&mut self) {
        if self.gesture.take().is_some() {
            debug!("drag cancelled");
        }
    }
}
