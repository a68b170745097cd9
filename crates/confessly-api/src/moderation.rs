use axum::{
    Extension, Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use tracing::info;

use confessly_types::api::{Claims, FlaggedItem, FlaggedListResponse, MessageResponse};
use confessly_types::models::ContentType;

use crate::error::ApiError;
use crate::flags::capitalized;
use crate::state::{AppState, run_db};
use crate::util::parse_timestamp;

/// Flagged items without author information; moderators judge content only.
pub async fn list_flagged(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = run_db(&state, |db| db.get_flagged_content()).await?;

    let flagged_content = rows
        .into_iter()
        .map(|row| FlaggedItem {
            content_type: row.content_type,
            id: row.id,
            content: row.content,
            created_at: parse_timestamp(&row.created_at),
            flag_reasons: row.flag_reasons,
        })
        .collect();

    Ok(Json(FlaggedListResponse { flagged_content }))
}

/// Soft delete: the row stays for vote/karma bookkeeping but disappears
/// from every listing.
pub async fn delete_content(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let Path((content_type, id)) = path?;
    let content_type: ContentType = content_type
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid content type"))?;

    let deleted = run_db(&state, move |db| db.soft_delete(content_type, id)).await?;
    if !deleted {
        return Err(ApiError::not_found(format!("{} not found", capitalized(content_type))));
    }

    info!(%content_type, id, moderator = claims.sub, "content removed by moderator");

    Ok(Json(MessageResponse {
        message: format!("{content_type} deleted successfully"),
    }))
}
