use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::{JsonRejection, PathRejection}},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::info;

use confessly_types::api::{
    Claims, ConfessionListResponse, CreateConfessionRequest, CreateConfessionResponse,
};
use confessly_types::models::MAX_CONFESSION_CHARS;

use crate::assistant;
use crate::error::ApiError;
use crate::state::{AppState, run_db};
use crate::util::{confession_response, validate_text};

const DEFAULT_PAGE_SIZE: u32 = 20;
const MAX_PAGE_SIZE: u32 = 100;

/// Raw strings so unparseable values fall back to the defaults.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

fn parse_or(raw: Option<&str>, default: u32) -> u32 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

pub async fn create_confession(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<CreateConfessionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body?;
    let content = validate_text(&req.content, MAX_CONFESSION_CHARS, "Confession")?;
    let mood = req.mood.unwrap_or_default().trim().to_string();
    let location = req.location.unwrap_or_default().trim().to_string();
    let tagged_users = req.tagged_users.unwrap_or_default().trim().to_string();

    let user_id = claims.sub;
    let row = run_db(&state, move |db| {
        db.create_confession(user_id, &content, &mood, &location, &tagged_users)
    })
    .await?;

    info!(confession_id = row.id, "confession posted");

    if state.config.auto_reply {
        assistant::schedule_reply(state.clone(), row.id, row.mood.clone(), row.content.clone());
    }

    Ok((
        StatusCode::CREATED,
        Json(CreateConfessionResponse {
            message: "Confession posted successfully".into(),
            confession: confession_response(row),
        }),
    ))
}

/// Newest first; `page` is 1-based.
pub async fn list_confessions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let page = parse_or(query.page.as_deref(), 1).max(1);
    let limit = parse_or(query.limit.as_deref(), DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    let offset = (page - 1).saturating_mul(limit);

    let rows = run_db(&state, move |db| db.list_confessions(limit, offset)).await?;

    Ok(Json(ConfessionListResponse {
        confessions: rows.into_iter().map(confession_response).collect(),
        page,
        limit,
    }))
}

pub async fn get_confession(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(confession_id) = path?;
    let row = run_db(&state, move |db| db.get_confession(confession_id))
        .await?
        .ok_or_else(|| ApiError::not_found("Confession not found"))?;

    Ok(Json(confession_response(row)))
}
