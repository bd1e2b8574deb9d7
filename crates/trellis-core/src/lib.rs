//! Trellis Core — flattened form-tree store, path addressing, and mutations

pub mod model;
pub mod mutation;
pub mod outline;
pub mod path;
pub mod sample;
pub mod store;
pub mod validate;


#[cfg(test)]
pub mod test_utils;

pub use model::{
    DefaultValue, FormNode, FormState, JsonMap, NodeId, NodeKind, PaletteItem, SelectOption,
    palette_items,
};
pub use mutation::{MutationError, NodeDraft, NodePatch};
pub use outline::render_outline;
pub use path::{is_ancestor_or_equal, parent_id_from_path, parse_path, resolve_node};
pub use sample::sample_form;
pub use store::{FormStore, ROOT_ID};
pub use validate::{Violation, validate};
