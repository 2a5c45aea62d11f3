use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::error::ApiError;
use crate::extractors::{UserId, ValidJson};
use crate::models::{NewUser, User};
use crate::state::AppState;

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.store.list().await?;
    Ok(Json(users))
}

pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<Json<User>, ApiError> {
    let user = state.store.get(id).await?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(new): ValidJson<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = state.store.create(new).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    UserId(id): UserId,
    ValidJson(new): ValidJson<NewUser>,
) -> Result<Json<User>, ApiError> {
    // The path id wins over anything the body carries.
    let user = state.store.update(id, new).await?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn solis() -> Json<Value> {
    Json(json!({ "fullname": "Carlos Solis" }))
}
