//! Domain models and parameter types.
//!
//! Models are converted from entity models at the repository boundary and from Serenity
//! types at the bot boundary, so services never touch either directly.

pub mod display;
pub mod member;
pub mod moderation;
pub mod note;
pub mod platform;
