use axum::{Router, middleware, routing::get};
use tower_http::trace::TraceLayer;

use crate::cors::cors_gate;
use crate::handlers::{create_user, delete_user, get_user, list_users, solis, update_user};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).put(update_user).delete(delete_user))
        .route("/solis", get(solis))
        .layer(middleware::from_fn(cors_gate))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
