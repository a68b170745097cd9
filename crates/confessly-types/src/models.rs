use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Karma at which a user gains access to the moderation endpoints.
pub const MODERATOR_KARMA: i64 = 100;

/// Reserved user id owning every comment written by the response bot.
pub const BOT_USER_ID: i64 = 0;

/// Display name for bot comments. Human authors are always `anonymous`.
pub const BOT_DISPLAY_HANDLE: &str = "Confessor Bot 🤖";
pub const ANONYMOUS_HANDLE: &str = "anonymous";

pub const MAX_CONFESSION_CHARS: usize = 500;
pub const MAX_COMMENT_CHARS: usize = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoteType {
    #[serde(rename = "upvote", alias = "up")]
    Up,
    #[serde(rename = "downvote", alias = "down")]
    Down,
}

impl VoteType {
    /// Storage spelling, also used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Up => "upvote",
            Self::Down => "downvote",
        }
    }

    /// Counter column on `confessions` tracking this vote type.
    pub fn counter_column(self) -> &'static str {
        match self {
            Self::Up => "upvotes",
            Self::Down => "downvotes",
        }
    }

    /// Karma a single vote of this type is worth to the confession author.
    pub fn karma(self) -> i64 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }
}

impl fmt::Display for VoteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VoteType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" | "up" => Ok(Self::Up),
            "downvote" | "down" => Ok(Self::Down),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// What a vote request did to the user's existing vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteAction {
    Added,
    Removed,
    Changed,
}

/// Things that can be flagged and moderated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Confession,
    Comment,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confession => "confession",
            Self::Comment => "comment",
        }
    }

    pub fn table(self) -> &'static str {
        match self {
            Self::Confession => "confessions",
            Self::Comment => "comments",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confession" => Ok(Self::Confession),
            "comment" => Ok(Self::Comment),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Moderator status is derived from karma, never stored.
pub fn is_moderator(karma: i64) -> bool {
    karma >= MODERATOR_KARMA
}

/// Public handle shown for a comment author.
pub fn comment_author_handle(user_id: i64) -> &'static str {
    if user_id == BOT_USER_ID {
        BOT_DISPLAY_HANDLE
    } else {
        ANONYMOUS_HANDLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vote_type_accepts_short_and_long_spellings() {
        assert_eq!("up".parse::<VoteType>(), Ok(VoteType::Up));
        assert_eq!("upvote".parse::<VoteType>(), Ok(VoteType::Up));
        assert_eq!("down".parse::<VoteType>(), Ok(VoteType::Down));
        assert_eq!("downvote".parse::<VoteType>(), Ok(VoteType::Down));
        assert!("sideways".parse::<VoteType>().is_err());
        assert!("Upvote".parse::<VoteType>().is_err());
    }

    #[test]
    fn vote_type_serializes_with_storage_spelling() {
        assert_eq!(serde_json::to_string(&VoteType::Down).unwrap(), "\"downvote\"");
        let v: VoteType = serde_json::from_str("\"up\"").unwrap();
        assert_eq!(v, VoteType::Up);
    }

    #[test]
    fn moderator_threshold_is_inclusive() {
        assert!(!is_moderator(99));
        assert!(is_moderator(100));
        assert!(is_moderator(150));
    }

    #[test]
    fn bot_comments_are_labelled() {
        assert_eq!(comment_author_handle(BOT_USER_ID), BOT_DISPLAY_HANDLE);
        assert_eq!(comment_author_handle(42), ANONYMOUS_HANDLE);
    }

    #[test]
    fn content_type_maps_to_table() {
        assert_eq!("comment".parse::<ContentType>().unwrap().table(), "comments");
        assert_eq!(ContentType::Confession.table(), "confessions");
        assert!("post".parse::<ContentType>().is_err());
    }
}
