pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::pdf::handlers::handle_generate_pdf;
use crate::state::AppState;
use crate::tailoring::handlers::handle_tailor;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/tailor", post(handle_tailor))
        .route("/generate-pdf", post(handle_generate_pdf))
        .with_state(state)
}
