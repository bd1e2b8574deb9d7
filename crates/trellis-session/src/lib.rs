//! Trellis Session — drag-gesture state machine over the form store

pub mod event;
pub mod session;


pub use event::{DragOrigin, DropCandidate, SourceKind};
pub use session::{DragKind, DragSession, DropEffect, Gesture};
