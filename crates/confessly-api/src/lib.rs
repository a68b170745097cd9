pub mod assistant;
pub mod auth;
pub mod comments;
pub mod confessions;
pub mod error;
pub mod flags;
pub mod middleware;
pub mod moderation;
pub mod profile;
pub mod state;
pub mod status;
pub mod util;
pub mod votes;

use axum::{
    Router, middleware as mw,
    routing::{delete, get, post},
};

use crate::middleware::{require_auth, require_moderator};
use crate::state::AppState;

/// Every `/api` route. CORS and tracing layers are added by the binary.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(status::health))
        .route("/api/ai/status", get(status::bot_status))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/confessions", get(confessions::list_confessions))
        .route("/api/confessions/{id}", get(confessions::get_confession))
        .route("/api/confessions/{id}/comments", get(comments::list_comments));

    let protected_routes = Router::new()
        .route("/api/user/profile", get(profile::get_profile))
        .route("/api/user/export", get(profile::export_data))
        .route("/api/confessions", post(confessions::create_confession))
        .route("/api/confessions/{id}/vote", post(votes::cast_vote))
        .route("/api/confessions/{id}/comments", post(comments::create_comment))
        .route("/api/flag", post(flags::flag_content))
        .route_layer(mw::from_fn_with_state(state.clone(), require_auth));

    // Layers run outside-in: auth first, then the karma check.
    let moderator_routes = Router::new()
        .route("/api/moderation/flagged", get(moderation::list_flagged))
        .route(
            "/api/moderation/{content_type}/{id}",
            delete(moderation::delete_content),
        )
        .route("/api/ai/process-confession/{id}", post(assistant::process_one))
        .route("/api/ai/process-all", post(assistant::process_all))
        .route_layer(mw::from_fn_with_state(state.clone(), require_moderator))
        .route_layer(mw::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(moderator_routes)
        .with_state(state)
}
