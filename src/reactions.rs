//! Automatic emoji reactions keyed on the message author.
//!
//! A fixed set of users each carry an integer opinion score, and each score
//! maps to one unicode emoji. Every non-bot message from a scored user gets
//! the matching reaction.

use std::collections::HashMap;

use serenity::all::{Message, ReactionType, UserId};

/// Static mapping from user id to opinion score to reaction emoji.
#[derive(Debug, Clone)]
pub struct ReactionPolicy {
    opinions: HashMap<UserId, i32>,
}

impl Default for ReactionPolicy {
    fn default() -> Self {
        Self {
            opinions: HashMap::from([
                (UserId::new(975500843581321227), 1),
                (UserId::new(1144727072992940082), -2),
            ]),
        }
    }
}

impl ReactionPolicy {
    /// The reaction to apply to `message`, if any.
    ///
    /// Bot authors, users without a score, and scores outside the emoji
    /// table all select nothing.
    pub fn reaction_for(&self, message: &Message) -> Option<ReactionType> {
        if message.author.bot {
            return None;
        }

        let score = self.opinions.get(&message.author.id)?;
        emoji_for_score(*score).map(|emoji| ReactionType::Unicode(emoji.to_string()))
    }
}

fn emoji_for_score(score: i32) -> Option<&'static str> {
    match score {
        2 => Some("✅"),
        1 => Some("👍"),
        -1 => Some("👎"),
        -2 => Some("❌"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_message, create_test_user};

    #[test]
    fn test_liked_user_gets_thumbs_up() {
        let policy = ReactionPolicy::default();
        let author = create_test_user(975500843581321227, "liked", false);
        let message = create_test_message(1, 2, author, "hello");

        assert_eq!(
            policy.reaction_for(&message),
            Some(ReactionType::Unicode("👍".to_string()))
        );
    }

    #[test]
    fn test_disliked_user_gets_cross_mark() {
        let policy = ReactionPolicy::default();
        let author = create_test_user(1144727072992940082, "disliked", false);
        let message = create_test_message(1, 2, author, "hello");

        assert_eq!(
            policy.reaction_for(&message),
            Some(ReactionType::Unicode("❌".to_string()))
        );
    }

    #[test]
    fn test_unknown_user_gets_no_reaction() {
        let policy = ReactionPolicy::default();
        let author = create_test_user(42, "stranger", false);
        let message = create_test_message(1, 2, author, "hello");

        assert_eq!(policy.reaction_for(&message), None);
    }

    #[test]
    fn test_bot_author_is_skipped() {
        let policy = ReactionPolicy::default();
        let author = create_test_user(975500843581321227, "liked-bot", true);
        let message = create_test_message(1, 2, author, "hello");

        assert_eq!(policy.reaction_for(&message), None);
    }

    #[test]
    fn test_unmapped_scores_select_nothing() {
        assert_eq!(emoji_for_score(0), None);
        assert_eq!(emoji_for_score(3), None);
        assert_eq!(emoji_for_score(-3), None);
    }
}
