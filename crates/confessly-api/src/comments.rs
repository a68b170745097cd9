use axum::{
    Extension, Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    response::IntoResponse,
};

use confessly_types::api::{
    Claims, CommentListResponse, CreateCommentRequest, CreateCommentResponse,
};
use confessly_types::models::MAX_COMMENT_CHARS;

use crate::error::ApiError;
use crate::state::{AppState, run_db};
use crate::util::{comment_response, validate_text};

pub async fn create_comment(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(confession_id) = path?;
    let Json(req) = body?;
    let content = validate_text(&req.content, MAX_COMMENT_CHARS, "Comment")?;

    let user_id = claims.sub;
    let row = run_db(&state, move |db| {
        if db.get_confession(confession_id)?.is_none() {
            return Ok(None);
        }
        db.create_comment(confession_id, user_id, &content).map(Some)
    })
    .await?
    .ok_or_else(|| ApiError::not_found("Confession not found"))?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCommentResponse {
            message: "Comment posted successfully".into(),
            comment: comment_response(row),
        }),
    ))
}

/// Oldest first. Bot replies are labelled; everyone else is anonymous.
pub async fn list_comments(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(confession_id) = path?;
    let rows = run_db(&state, move |db| {
        if db.get_confession(confession_id)?.is_none() {
            return Ok(None);
        }
        db.get_comments(confession_id).map(Some)
    })
    .await?
    .ok_or_else(|| ApiError::not_found("Confession not found"))?;

    Ok(Json(CommentListResponse {
        comments: rows.into_iter().map(comment_response).collect(),
    }))
}
