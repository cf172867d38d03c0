//! Modbot Test Utils
//!
//! Provides shared testing utilities for the moderation bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories for
//! inserting entities with sensible defaults, and factories for Serenity model objects.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Note;
//!
//! #[tokio::test]
//! async fn test_note_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Note)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
