//! Factories for inserting test entities with sensible defaults.
//!
//! Each factory uses a builder pattern: construct with `new(db)`, override the fields the
//! test cares about, then call `build()` to insert the row.

pub mod helpers;
pub mod note;

pub use note::{create_note, NoteFactory};
