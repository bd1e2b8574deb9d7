//! Core data structures for the form tree

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque attribute bag (style overrides, custom props). Passed through
/// untouched; the core never interprets its contents.
pub type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Unique, stable identifier for a node. Stable for the node's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        NodeId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminates what kind of form component a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    // ── Layout containers ───────────────────────────────────
    Container,
    Row,
    Col,

    // ── Leaf controls ───────────────────────────────────────
    Input,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Button,
    Text,
    Divider,
}

impl NodeKind {
    /// Container kinds are the only ones that may carry children.
    pub fn is_container(self) -> bool {
        matches!(self, NodeKind::Container | NodeKind::Row | NodeKind::Col)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Container => "container",
            NodeKind::Row => "row",
            NodeKind::Col => "col",
            NodeKind::Input => "input",
            NodeKind::Textarea => "textarea",
            NodeKind::Select => "select",
            NodeKind::Checkbox => "checkbox",
            NodeKind::Radio => "radio",
            NodeKind::Button => "button",
            NodeKind::Text => "text",
            NodeKind::Divider => "divider",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A control's default value — a flag for toggles, text for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Flag(bool),
    Text(String),
}

/// One choice in a `select` or `radio` control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// One element of the form tree — a layout container or a leaf control.
///
/// Optional fields are omitted from JSON when absent so a document
/// round-trips without gaining keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormNode {
    pub id: NodeId,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<DefaultValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
    /// Ordered child ids. Present exactly on container kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<JsonMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<JsonMap>,
}

impl FormNode {
    /// Bare node of the given kind; containers start with an empty child list.
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        FormNode {
            id,
            kind,
            label: None,
            placeholder: None,
            required: None,
            default_value: None,
            options: None,
            children: kind.is_container().then(Vec::new),
            style: None,
            props: None,
        }
    }
}

/// The externally observed snapshot — the only persisted/transport shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    /// Flat map of all nodes by id.
    pub nodes: BTreeMap<NodeId, FormNode>,
    /// Root container node id.
    pub root_id: NodeId,
    /// Currently selected node, for the external property editor.
    pub selected_node_id: Option<NodeId>,
}

/// One draggable entry in the component palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteItem {
    pub kind: NodeKind,
    pub label: &'static str,
}

/// The component kinds the palette offers, in display order.
pub fn palette_items() -> &'static [PaletteItem] {
    const ITEMS: &[PaletteItem] = &[
        PaletteItem { kind: NodeKind::Container, label: "Container" },
        PaletteItem { kind: NodeKind::Row, label: "Row" },
        PaletteItem { kind: NodeKind::Col, label: "Column" },
        PaletteItem { kind: NodeKind::Input, label: "Input" },
        PaletteItem { kind: NodeKind::Textarea, label: "TextArea" },
        PaletteItem { kind: NodeKind::Select, label: "Select" },
        PaletteItem { kind: NodeKind::Checkbox, label: "Checkbox" },
        PaletteItem { kind: NodeKind::Button, label: "Button" },
        PaletteItem { kind: NodeKind::Text, label: "Text" },
        PaletteItem { kind: NodeKind::Divider, label: "Divider" },
    ];
    ITEMS
}
