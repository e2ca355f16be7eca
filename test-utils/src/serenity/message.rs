//! Test factory for creating Serenity Message objects.
//!
//! This module provides factory functions for creating mock Serenity `Message`
//! structs for testing purposes. These factories create valid Message objects
//! by deserializing JSON, simulating a gateway MESSAGE_CREATE payload.

use serenity::all::{Message, User};

/// Creates a test Serenity Message with customizable fields.
///
/// Creates a Message object by deserializing JSON with the provided values.
/// The author is serialized back into the payload so the resulting message
/// carries exactly the given User. All other fields are set to reasonable
/// defaults (regular message type, no mentions, no attachments, not pinned).
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - ID of the channel the message was sent in
/// - `author` - The User that authored the message
/// - `content` - Message text content
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{message::create_test_message, user::create_test_user};
///
/// let author = create_test_user(123456789, "somebody", false);
/// let message = create_test_message(1, 2, author, "hello there");
/// assert_eq!(message.content, "hello there");
/// assert_eq!(message.author.id.get(), 123456789);
/// ```
pub fn create_test_message(message_id: u64, channel_id: u64, author: User, content: &str) -> Message {
    let author_json =
        serde_json::to_value(&author).expect("Failed to serialize test user to JSON");

    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": author_json,
        "content": content,
        "timestamp": "2020-01-01T00:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "mention_channels": [],
        "attachments": [],
        "embeds": [],
        "reactions": [],
        "pinned": false,
        "webhook_id": null,
        "type": 0,
        "activity": null,
        "application": null,
        "message_reference": null,
        "flags": 0,
        "referenced_message": null,
        "components": [],
        "sticker_items": [],
        "position": null,
        "guild_id": null,
        "member": null,
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
