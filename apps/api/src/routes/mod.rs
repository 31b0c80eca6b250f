pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::optimizer::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/optimize", post(handlers::handle_optimize))
        .with_state(state)
}
