use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;

use confessly_bot::{BOT_NAME, PRIORITY_MOODS};
use confessly_types::api::{BotStatusResponse, HealthResponse};

use crate::state::AppState;

pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "OK".into(),
        timestamp: Utc::now(),
    })
}

pub async fn bot_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(BotStatusResponse {
        name: BOT_NAME.into(),
        mode: "rule-based".into(),
        response_rate: state.responder.response_rate(),
        priority_moods: PRIORITY_MOODS.iter().map(|m| m.to_string()).collect(),
    })
}
