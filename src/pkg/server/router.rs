use axum::routing::{post, put};
use axum::{routing::get, Router};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::handlers::ui::home;
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/filter", post(handlers::jobs::filter))
        .route("/page", post(handlers::ui::set_page))
        .route("/page-size", post(handlers::ui::set_page_size))
        .route("/jobs", post(handlers::jobs::create))
        .route("/jobs/new", get(handlers::ui::open_create))
        .route("/jobs/new/close", post(handlers::ui::close_create))
        .route("/jobs/{id}", put(handlers::jobs::update))
        .route("/jobs/{id}/detail", get(handlers::ui::open_detail))
        .route("/jobs/{id}/edit", get(handlers::ui::open_edit))
        .route("/jobs/{id}/delete", get(handlers::ui::arm_delete))
        .route("/jobs/dialog/close", post(handlers::ui::close_record_dialog))
        .route("/jobs/delete/cancel", post(handlers::ui::cancel_delete))
        .route("/jobs/delete/confirm", post(handlers::jobs::delete))
        .route("/generate", get(handlers::ui::open_generate))
        .route("/generate", post(handlers::jobs::generate))
        .route("/generate/close", post(handlers::ui::close_generate))
        .route("/export", get(handlers::jobs::export))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state)
}
