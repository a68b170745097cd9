use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use tracing::info;

use confessly_types::api::{Claims, FlagRequest, MessageResponse};
use confessly_types::models::ContentType;

use crate::error::ApiError;
use crate::state::{AppState, run_db};

pub async fn flag_content(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<FlagRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let content_type: ContentType = req
        .content_type
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid content type"))?;
    let content_id = req
        .content_id
        .ok_or_else(|| ApiError::bad_request("Content ID is required"))?;
    let reason = req.reason.unwrap_or_default().trim().to_string();

    let user_id = claims.sub;
    let flagged = run_db(&state, move |db| {
        db.flag_content(user_id, content_type, content_id, &reason)
    })
    .await?;

    if !flagged {
        return Err(ApiError::not_found(format!("{} not found", capitalized(content_type))));
    }

    info!(%content_type, content_id, "content flagged");

    Ok(Json(MessageResponse {
        message: "Content flagged successfully".into(),
    }))
}

pub(crate) fn capitalized(content_type: ContentType) -> &'static str {
    match content_type {
        ContentType::Confession => "Confession",
        ContentType::Comment => "Comment",
    }
}
