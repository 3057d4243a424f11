use crate::activities as activities_service;
use crate::assets;
use crate::config;
use crate::state;

use axum::Router;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;

mod activities;

pub fn app(config: config::AppConfig) -> Router {
    let registry = match config.activities_file.as_ref() {
        Some(path) => activities_service::ActivityRegistry::load(path)
            .unwrap_or_else(|err| panic!("invalid activities catalog: {err}")),
        None => activities_service::ActivityRegistry::with_defaults(),
    };
    let state = state::AppState {
        config,
        registry: std::sync::Arc::new(std::sync::Mutex::new(registry)),
    };
    Router::new()
        .route("/", get(activities::activities_page))
        .route("/activities", get(activities::activities_list))
        .route(
            "/activities/{name}/signup",
            post(activities::activity_signup),
        )
        .route(
            "/activities/{name}/participants",
            delete(activities::activity_unregister),
        )
        .route("/static/style.css", get(assets::stylesheet))
        .route("/static/app.js", get(assets::app_script))
        .route("/health", get(health))
        .with_state(state)
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
