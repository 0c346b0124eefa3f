use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod model;
pub mod service;
pub mod store;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/videos", post(handler::submit_video))
        .route("/videos/{video_id}", get(handler::get_video))
}
