use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState, history: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit))
        .route("/reset", post(handlers::reset))
        .route("/api/view", get(handlers::view_state));

    if history {
        router = router
            .route("/refresh-profile", post(handlers::refresh_profile))
            .route("/refresh-logs", post(handlers::refresh_logs));
    }

    router.with_state(state)
}
