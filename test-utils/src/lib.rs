//! Jukebox Test Utils
//!
//! Provides shared testing utilities for building unit tests for the jukebox
//! bot. This crate offers factory functions for creating Serenity model
//! objects (users, messages) by deserializing JSON, simulating what Discord's
//! API would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_message, create_test_user};
//!
//! #[test]
//! fn test_message_handling() {
//!     let author = create_test_user(123456789, "somebody", false);
//!     let message = create_test_message(1, 2, author, "hello");
//!     // Use in your tests...
//! }
//! ```

pub mod serenity;
