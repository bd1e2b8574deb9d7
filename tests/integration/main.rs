//! Integration tests for Trellis
//!
//! These tests verify that the store, session, and document layers work
//! together correctly.

use std::process::Command;

use trellis_core::{
    FormState, FormStore, NodeDraft, NodeId, NodeKind, sample_form, validate,
};
use trellis_session::{DragOrigin, DragSession, DropCandidate, DropEffect};

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trellis"));
    assert!(stdout.contains("Form-tree designer core"));
}

/// Test the sample -> check round-trip through the binary itself
#[test]
fn test_cli_sample_then_check() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("form.json");

    let sample = Command::new("cargo")
        .args(["run", "--", "sample", "--out"])
        .arg(&path)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");
    assert!(sample.status.success());
    assert!(path.exists());

    let check = Command::new("cargo")
        .args(["run", "--", "check"])
        .arg(&path)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");
    assert!(check.status.success());
    let stdout = String::from_utf8_lossy(&check.stdout);
    assert!(stdout.contains("no violations"));

    let show = Command::new("cargo")
        .args(["run", "--", "show"])
        .arg(&path)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");
    assert!(show.status.success());
    let stdout = String::from_utf8_lossy(&show.stdout);
    assert!(stdout.contains("container \"Contact us\" (root)"));
}

/// Test that check exits non-zero for a structurally broken document
#[test]
fn test_cli_check_rejects_broken_document() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.json");

    let mut state = sample_form();
    state
        .nodes
        .get_mut(&NodeId::from("root"))
        .unwrap()
        .children
        .as_mut()
        .unwrap()
        .push(NodeId::from("ghost"));
    std::fs::write(&path, serde_json::to_string_pretty(&state).unwrap()).unwrap();

    let check = Command::new("cargo")
        .args(["run", "--", "check"])
        .arg(&path)
        .current_dir(".")
        .output()
        .expect("Failed to execute command");
    assert!(!check.status.success());
    let stderr = String::from_utf8_lossy(&check.stderr);
    assert!(stderr.contains("violation"));
}

/// Test that a document survives a trip through disk unchanged
#[test]
fn test_sample_round_trips_through_disk() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("form.json");

    let state = sample_form();
    std::fs::write(&path, serde_json::to_string_pretty(&state).unwrap()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let loaded: FormState = serde_json::from_str(&raw).unwrap();

    assert_eq!(state, loaded);
    assert!(validate(&loaded).is_empty());
}

/// Test a full editing session: load the sample, drag new components in,
/// reorder, delete — invariants hold at every step.
#[test]
fn test_editing_session_end_to_end() {
    let mut store = FormStore::new();
    store.replace(sample_form());
    let root = store.root_id().clone();
    let mut session = DragSession::new();

    // Drag a divider off the palette, dropping it above the submit button.
    session.start(&store, DragOrigin::palette(NodeKind::Divider));
    session.drag_over(&store, &DropCandidate::new("root", 4));
    let DropEffect::Added(divider) = session.end(&mut store, None) else {
        panic!("palette drop should have added a node");
    };
    assert!(validate(store.snapshot()).is_empty());

    let children = store.get(&root).unwrap().children.clone().unwrap();
    assert_eq!(children[4], divider);

    // Reorder: move the message textarea to the top of the form.
    let message = NodeId::from("message");
    session.start(&store, DragOrigin::canvas(message.clone()));
    let effect = session.end(&mut store, Some(&DropCandidate::new("root", 0)));
    assert_eq!(effect, DropEffect::Moved(message.clone()));
    assert!(validate(store.snapshot()).is_empty());

    let children = store.get(&root).unwrap().children.clone().unwrap();
    assert_eq!(children[0], message);

    // Edit and delete through the property-editor boundary.
    store
        .update_node(
            &message,
            trellis_core::NodePatch {
                label: Some("Your message".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    store.remove_node(&NodeId::from("name-row")).unwrap();
    assert!(validate(store.snapshot()).is_empty());
    assert!(!store.contains(&NodeId::from("first-name")));
}

/// Test that palette drops build a fresh form from nothing
#[test]
fn test_build_form_from_empty_store() {
    let mut store = FormStore::new();
    let mut session = DragSession::new();

    for kind in [NodeKind::Input, NodeKind::Textarea, NodeKind::Button] {
        session.start(&store, DragOrigin::palette(kind));
        let candidate = DropCandidate::new("root", store.len());
        assert!(session.is_valid_target(&store, &candidate.target_path));
        let effect = session.end(&mut store, Some(&candidate));
        assert!(matches!(effect, DropEffect::Added(_)));
    }

    let root = store.root_id().clone();
    let children = store.get(&root).unwrap().children.clone().unwrap();
    assert_eq!(children.len(), 3);
    assert_eq!(store.get(&children[2]).unwrap().kind, NodeKind::Button);
    assert!(validate(store.snapshot()).is_empty());
}

/// Test the mutation boundary directly, as the property editor uses it
#[test]
fn test_property_editor_boundary() {
    let mut store = FormStore::new();
    let root = store.root_id().clone();
    let field = store
        .add_node(&root, NodeDraft::of_kind(NodeKind::Select), None)
        .unwrap();

    store.select(Some(field.clone()));
    assert_eq!(store.selected(), Some(&field));

    store.remove_node(&field).unwrap();
    assert_eq!(store.selected(), None);
    assert_eq!(store.len(), 1);
}
