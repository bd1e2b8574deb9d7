//! Gesture descriptors crossing the input-source boundary
//!
//! The pointer/touch layer is external; it reports abstract drag-phase
//! events carrying these descriptors, and nothing else crosses the seam.

use serde::{Deserialize, Serialize};
use trellis_core::{NodeId, NodeKind};

/// Where a drag gesture began.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// A fresh component dragged off the palette.
    Palette,
    /// An existing canvas node being reordered.
    Canvas,
}

/// Drag-start descriptor reported by the input source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragOrigin {
    pub source_kind: SourceKind,
    /// The canvas node being dragged (canvas drags only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_id: Option<NodeId>,
    /// The component kind a palette drag will create on commit.
    #[serde(rename = "declaredType", skip_serializing_if = "Option::is_none")]
    pub declared_kind: Option<NodeKind>,
}

impl DragOrigin {
    pub fn palette(kind: NodeKind) -> Self {
        DragOrigin {
            source_kind: SourceKind::Palette,
            node_id: None,
            declared_kind: Some(kind),
        }
    }

    pub fn canvas(node_id: NodeId) -> Self {
        DragOrigin {
            source_kind: SourceKind::Canvas,
            node_id: Some(node_id),
            declared_kind: None,
        }
    }
}

/// A drop slot: the droppable path under the pointer plus the insertion
/// index within that container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropCandidate {
    pub target_path: String,
    pub target_index: usize,
}

impl DropCandidate {
    pub fn new(path: impl Into<String>, index: usize) -> Self {
        DropCandidate {
            target_path: path.into(),
            target_index: index,
        }
    }
}
