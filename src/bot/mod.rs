//! Discord bot integration.
//!
//! Serenity's event handler lives here together with the slash command definitions and
//! the `SerenityGateway` that services use to reach Discord. Handlers translate
//! interactions into service calls and service results into interaction replies.

pub mod command;
pub mod gateway;
pub mod handler;
pub mod start;
pub mod state;
