//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (User, Message) for testing purposes. These factories create valid Serenity
//! objects by deserializing JSON, simulating what Discord's API would return.
//!
//! # Overview
//!
//! When testing code that inspects Discord messages via Serenity, you often
//! need to create mock Serenity structs. These factories provide a consistent
//! way to create these objects with sensible defaults while allowing
//! customization of the fields the bot actually reads.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[test]
//! fn test_reaction_selection() {
//!     // Create a test author and a message written by them
//!     let author = create_test_user(123456789, "somebody", false);
//!     let message = create_test_message(1, 2, author, "hello there");
//!
//!     // Use in your tests...
//! }
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use message::create_test_message;
pub use user::create_test_user;
