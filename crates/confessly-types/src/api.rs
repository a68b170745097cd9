use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{VoteAction, VoteType};

// -- JWT Claims --

/// JWT claims issued at login/registration and checked by the auth middleware.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub exp: usize,
}

// -- Generic --

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

// -- Auth --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub favorite_snack: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub handle: String,
    pub bio: String,
    pub favorite_snack: String,
    pub karma: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub id: i64,
    pub email: String,
    pub handle: String,
    pub bio: String,
    pub favorite_snack: String,
    pub karma: i64,
    #[serde(rename = "isModerator")]
    pub is_moderator: bool,
    pub created_at: DateTime<Utc>,
}

// -- Confessions --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConfessionRequest {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tagged_users: Option<String>,
}

/// Reader view of a confession. Carries no author reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfessionResponse {
    pub id: i64,
    pub content: String,
    pub mood: String,
    pub location: String,
    pub tagged_users: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: DateTime<Utc>,
    pub author_handle: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateConfessionResponse {
    pub message: String,
    pub confession: ConfessionResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfessionListResponse {
    pub confessions: Vec<ConfessionResponse>,
    pub page: u32,
    pub limit: u32,
}

// -- Votes --

/// Fields default to empty so a missing value fails handler validation with
/// a specific message instead of a generic body rejection.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    #[serde(rename = "voteType", default)]
    pub vote_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResult {
    pub action: VoteAction,
    pub vote_type: VoteType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_vote_type: Option<VoteType>,
    pub karma_delta: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteCounts {
    pub id: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteResponse {
    pub message: String,
    pub vote_result: VoteResult,
    pub confession: VoteCounts,
}

// -- Comments --

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub author_handle: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCommentResponse {
    pub message: String,
    pub comment: CommentResponse,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentResponse>,
}

// -- Flags & moderation --

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagRequest {
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub content_id: Option<i64>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlaggedItem {
    #[serde(rename = "type")]
    pub content_type: String,
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub flag_reasons: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FlaggedListResponse {
    #[serde(rename = "flaggedContent")]
    pub flagged_content: Vec<FlaggedItem>,
}

// -- Bot --

#[derive(Debug, Serialize, Deserialize)]
pub struct BotStatusResponse {
    pub name: String,
    pub mode: String,
    pub response_rate: f64,
    pub priority_moods: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BotReplyResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<CommentResponse>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BotBatchResponse {
    pub message: String,
    pub responses: Vec<CommentResponse>,
}

// -- Export --

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportProfile {
    pub email: String,
    pub handle: String,
    pub bio: String,
    pub favorite_snack: String,
    pub karma: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfession {
    pub content: String,
    pub mood: String,
    pub location: String,
    pub tagged_users: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportComment {
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub confession_content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserData {
    pub profile: ExportProfile,
    pub confessions: Vec<ExportConfession>,
    pub comments: Vec<ExportComment>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub exported_at: DateTime<Utc>,
    pub user_data: UserData,
}
