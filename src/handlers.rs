use crate::state::AppState;
use crate::ui::render_index;
use crate::view::Page;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use std::collections::HashMap;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.client.view().await;
    Html(render_index(&page))
}

pub async fn view_state(State(state): State<AppState>) -> Json<Page> {
    Json(state.client.view().await)
}

pub async fn submit(
    State(state): State<AppState>,
    Form(input): Form<HashMap<String, String>>,
) -> Redirect {
    // The history refresh runs on its own; the redirect does not wait for it.
    let _ = state.client.submit_coach(&input).await;
    Redirect::to("/")
}

pub async fn reset(State(state): State<AppState>) -> Redirect {
    state.client.reset().await;
    Redirect::to("/")
}

pub async fn refresh_profile(State(state): State<AppState>) -> Redirect {
    state.client.refresh_profile().await;
    Redirect::to("/")
}

pub async fn refresh_logs(State(state): State<AppState>) -> Redirect {
    state.client.refresh_logs().await;
    Redirect::to("/")
}
