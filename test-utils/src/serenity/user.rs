//! Test factory for creating Serenity User objects.
//!
//! This module provides factory functions for creating mock Serenity `User`
//! structs for testing purposes. These factories create valid User objects by
//! deserializing JSON, simulating what Discord's API would return.

use serenity::all::User;

/// Creates a test Serenity User with customizable fields.
///
/// Creates a User object by deserializing JSON with the provided values.
/// All other fields are set to reasonable defaults (no avatar, no banner,
/// post-username-migration discriminator).
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `name` - Account username
/// - `bot` - Whether the account is a bot user
///
/// # Returns
/// - `User` - A valid Serenity User struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::user::create_test_user;
///
/// // Create a regular account
/// let user = create_test_user(123456789, "somebody", false);
/// assert_eq!(user.name, "somebody");
/// assert!(!user.bot);
///
/// // Create a bot account
/// let bot = create_test_user(987654321, "helper-bot", true);
/// assert!(bot.bot);
/// ```
pub fn create_test_user(user_id: u64, name: &str, bot: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": user_id.to_string(),
        "username": name,
        "discriminator": "0",
        "global_name": name,
        "avatar": null,
        "bot": bot,
        "public_flags": null,
    }))
    .expect("Failed to create test user - invalid JSON structure")
}
