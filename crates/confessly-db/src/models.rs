//! Database row types. These map directly to SQLite rows and stay separate
//! from the confessly-types API models.

use confessly_types::models::{VoteAction, VoteType};

pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub handle: String,
    pub bio: String,
    pub favorite_snack: String,
    pub karma: i64,
    pub is_suspended: bool,
    pub created_at: String,
}

/// `user_id` is the author. It never leaves the API layer.
pub struct ConfessionRow {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub mood: String,
    pub location: String,
    pub tagged_users: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub is_flagged: bool,
    pub created_at: String,
}

pub struct CommentRow {
    pub id: i64,
    pub confession_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: String,
}

pub struct FlaggedRow {
    pub content_type: String,
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub flag_reasons: Option<String>,
}

pub struct ExportCommentRow {
    pub content: String,
    pub created_at: String,
    pub confession_content: String,
}

pub struct UserExportRows {
    pub profile: UserRow,
    pub confessions: Vec<ConfessionRow>,
    pub comments: Vec<ExportCommentRow>,
}

/// Result of one committed vote transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteOutcome {
    pub action: VoteAction,
    pub vote_type: VoteType,
    pub previous: Option<VoteType>,
    pub karma_delta: i64,
    pub author_id: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileReport {
    pub confessions_fixed: usize,
    pub users_fixed: usize,
}
