//! Glue between the reply selector and storage: decides, stores the reply as
//! a bot comment, and schedules delayed replies for new confessions.

use std::time::Duration;

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};
use rand::Rng;
use tracing::{debug, error, info};

use confessly_db::models::CommentRow;
use confessly_types::api::{BotBatchResponse, BotReplyResponse};
use confessly_types::models::BOT_USER_ID;

use crate::error::ApiError;
use crate::state::{AppState, run_db};
use crate::util::comment_response;

/// How many of the newest confessions a batch run looks at.
const BATCH_SIZE: u32 = 50;

/// Runs the selector once and stores its reply, if any. Failures are logged
/// and reported as "no reply"; the bot never fails a request.
pub async fn process_confession(
    state: &AppState,
    confession_id: i64,
    mood: &str,
    content: &str,
) -> Option<CommentRow> {
    let reply = {
        let mut rng = rand::rng();
        state.responder.respond(Some(mood), content, &mut rng)
    };
    let Some(reply) = reply else {
        debug!(confession_id, "bot stayed quiet");
        return None;
    };

    let stored = run_db(state, move |db| {
        // The confession may have been removed while the reply was pending.
        if db.get_confession(confession_id)?.is_none() {
            return Ok(None);
        }
        db.create_comment(confession_id, BOT_USER_ID, reply).map(Some)
    })
    .await;

    match stored {
        Ok(Some(row)) => {
            info!(confession_id, "bot replied");
            Some(row)
        }
        Ok(None) => None,
        Err(e) => {
            error!(confession_id, "bot reply failed: {:?}", e);
            None
        }
    }
}

/// Fire-and-forget reply after a random delay so it does not land together
/// with the post.
pub fn schedule_reply(state: AppState, confession_id: i64, mood: String, content: String) {
    let (min_ms, max_ms) = state.config.reply_delay_ms;
    let delay_ms = if max_ms > min_ms {
        rand::rng().random_range(min_ms..=max_ms)
    } else {
        min_ms
    };

    tokio::spawn(async move {
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        process_confession(&state, confession_id, &mood, &content).await;
    });
}

pub async fn process_one(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(confession_id) = path?;
    let confession = run_db(&state, move |db| db.get_confession(confession_id))
        .await?
        .ok_or_else(|| ApiError::not_found("Confession not found"))?;

    let reply = process_confession(&state, confession.id, &confession.mood, &confession.content).await;

    let message = if reply.is_some() {
        "Bot response generated"
    } else {
        "Bot chose not to respond to this confession"
    };

    Ok(Json(BotReplyResponse {
        message: message.into(),
        response: reply.map(comment_response),
    }))
}

pub async fn process_all(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let confessions = run_db(&state, |db| db.list_confessions(BATCH_SIZE, 0)).await?;

    let mut responses = Vec::new();
    for confession in confessions {
        if let Some(row) =
            process_confession(&state, confession.id, &confession.mood, &confession.content).await
        {
            responses.push(comment_response(row));
        }
    }

    Ok(Json(BotBatchResponse {
        message: format!("Bot generated {} responses", responses.len()),
        responses,
    }))
}
