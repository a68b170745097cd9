use axum::{
    Extension, Json,
    extract::{Path, State, rejection::{JsonRejection, PathRejection}},
    response::IntoResponse,
};

use confessly_types::api::{Claims, VoteCounts, VoteRequest, VoteResponse, VoteResult};
use confessly_types::models::VoteType;

use crate::error::ApiError;
use crate::state::{AppState, run_db};

/// Toggle/flip semantics live in the ledger: same vote twice removes it,
/// the other vote flips it.
pub async fn cast_vote(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Extension(claims): Extension<Claims>,
    body: Result<Json<VoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(confession_id) = path?;
    let Json(req) = body?;
    let vote: VoteType = req
        .vote_type
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid vote type"))?;

    let user_id = claims.sub;
    let outcome = run_db(&state, move |db| db.cast_vote(user_id, confession_id, vote))
        .await?
        .ok_or_else(|| ApiError::not_found("Confession not found"))?;

    Ok(Json(VoteResponse {
        message: "Vote recorded successfully".into(),
        vote_result: VoteResult {
            action: outcome.action,
            vote_type: outcome.vote_type,
            old_vote_type: outcome.previous.filter(|p| *p != outcome.vote_type),
            karma_delta: outcome.karma_delta,
        },
        confession: VoteCounts {
            id: confession_id,
            upvotes: outcome.upvotes,
            downvotes: outcome.downvotes,
        },
    }))
}
