//! Business logic for moderation commands.
//!
//! Services receive the invoking member, the guild settings and a `ModerationGateway`,
//! and return either the private reply text or a `CommandError`. They never touch
//! Serenity's interaction types, which keeps every flow testable against a recording
//! gateway.

pub mod auth;
pub mod embed_session;
pub mod format;
pub mod gateway;
pub mod intake;
pub mod log;
pub mod moderation;
pub mod note;
pub mod review;
pub mod vote;

#[cfg(test)]
mod test;
