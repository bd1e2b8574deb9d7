//! The built-in sample document

use std::collections::BTreeMap;

use crate::model::{DefaultValue, FormNode, FormState, NodeId, NodeKind};

fn leaf(id: &str, kind: NodeKind, label: &str) -> FormNode {
    let mut node = FormNode::new(NodeId::from(id), kind);
    node.label = Some(label.to_string());
    node
}

fn container(id: &str, kind: NodeKind, children: &[&str]) -> FormNode {
    let mut node = FormNode::new(NodeId::from(id), kind);
    node.children = Some(children.iter().map(|c| NodeId::from(*c)).collect());
    node
}

fn insert(nodes: &mut BTreeMap<NodeId, FormNode>, node: FormNode) {
    nodes.insert(node.id.clone(), node);
}

/// A small contact form exercising every structural feature: a nested
/// two-column row, text controls, a toggle, and a submit button.
pub fn sample_form() -> FormState {
    let mut nodes = BTreeMap::new();

    let mut root = container(
        "root",
        NodeKind::Container,
        &["heading", "name-row", "message", "subscribe", "submit"],
    );
    root.label = Some("Contact us".to_string());
    insert(&mut nodes, root);

    insert(
        &mut nodes,
        leaf("heading", NodeKind::Text, "We usually reply within two days."),
    );

    insert(
        &mut nodes,
        container("name-row", NodeKind::Row, &["first-col", "last-col"]),
    );
    insert(
        &mut nodes,
        container("first-col", NodeKind::Col, &["first-name"]),
    );
    insert(
        &mut nodes,
        container("last-col", NodeKind::Col, &["last-name"]),
    );

    let mut first_name = leaf("first-name", NodeKind::Input, "First name");
    first_name.placeholder = Some("Jane".to_string());
    first_name.required = Some(true);
    insert(&mut nodes, first_name);

    let mut last_name = leaf("last-name", NodeKind::Input, "Last name");
    last_name.placeholder = Some("Doe".to_string());
    last_name.required = Some(true);
    insert(&mut nodes, last_name);

    let mut message = leaf("message", NodeKind::Textarea, "Message");
    message.placeholder = Some("How can we help?".to_string());
    message.required = Some(true);
    insert(&mut nodes, message);

    let mut subscribe = leaf("subscribe", NodeKind::Checkbox, "Send me product updates");
    subscribe.default_value = Some(DefaultValue::Flag(false));
    insert(&mut nodes, subscribe);

    insert(&mut nodes, leaf("submit", NodeKind::Button, "Send"));

    FormState {
        nodes,
        root_id: NodeId::from("root"),
        selected_node_id: None,
    }
}
