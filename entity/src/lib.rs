//! SeaORM entity definitions for the moderation bot database.

pub mod prelude;

pub mod note;
