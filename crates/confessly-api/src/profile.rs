use axum::{
    Extension, Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use confessly_types::api::{
    Claims, ExportComment, ExportConfession, ExportProfile, ExportResponse, ProfileResponse,
    UserData,
};
use confessly_types::models::is_moderator;

use crate::error::ApiError;
use crate::state::{AppState, run_db};
use crate::util::parse_timestamp;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = claims.sub;
    let user = run_db(&state, move |db| db.get_user_by_id(user_id))
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(ProfileResponse {
        id: user.id,
        email: user.email,
        handle: user.handle,
        bio: user.bio,
        favorite_snack: user.favorite_snack,
        karma: user.karma,
        is_moderator: is_moderator(user.karma),
        created_at: parse_timestamp(&user.created_at),
    }))
}

/// Everything the user authored, as a downloadable JSON file.
pub async fn export_data(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = claims.sub;
    let data = run_db(&state, move |db| db.get_user_data(user_id))
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    let now = Utc::now();
    let file_name = format!(
        "confessly-data-{}-{}.json",
        user_id,
        now.timestamp_millis()
    );

    let body = ExportResponse {
        exported_at: now,
        user_data: UserData {
            profile: ExportProfile {
                email: data.profile.email,
                handle: data.profile.handle,
                bio: data.profile.bio,
                favorite_snack: data.profile.favorite_snack,
                karma: data.profile.karma,
                created_at: parse_timestamp(&data.profile.created_at),
            },
            confessions: data
                .confessions
                .into_iter()
                .map(|c| ExportConfession {
                    created_at: parse_timestamp(&c.created_at),
                    content: c.content,
                    mood: c.mood,
                    location: c.location,
                    tagged_users: c.tagged_users,
                    upvotes: c.upvotes,
                    downvotes: c.downvotes,
                })
                .collect(),
            comments: data
                .comments
                .into_iter()
                .map(|c| ExportComment {
                    created_at: parse_timestamp(&c.created_at),
                    content: c.content,
                    confession_content: c.confession_content,
                })
                .collect(),
        },
    };

    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{file_name}\""),
        )],
        Json(body),
    ))
}
