pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::layouts::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Layout API
        .route("/layouts", post(handlers::handle_create_layout))
        // static segment takes precedence over /layouts/:id
        .route("/layouts/metadata", get(handlers::handle_get_metadata))
        .route(
            "/layouts/:id",
            get(handlers::handle_get_layout)
                .put(handlers::handle_update_layout)
                .delete(handlers::handle_delete_layout),
        )
        .with_state(state)
}
