// src/handlers/auth.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::ApiError,
    config::AppState,
    models::auth::{CreateUserPayload, LoginPayload, LoginResponse, User},
};

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Lista de usuários (sem senha)", body = Vec<User>)
    )
)]
pub async fn list_users(State(app_state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let users = app_state
        .auth_service
        .list_users()
        .await
        .map_err(|e| e.to_api_error("Server Error"))?;

    Ok(Json(users))
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User)
    )
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let user = app_state
        .auth_service
        .register_user(payload)
        .await
        .map_err(|e| e.to_api_error("Server Error"))?;

    Ok((StatusCode::CREATED, Json(user)))
}

// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Users",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Login aceito", body = LoginResponse),
        (status = 401, description = "Usuário ou senha inválidos")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let nome = app_state
        .auth_service
        .login_user(payload.email.as_deref(), payload.senha.as_deref())
        .await
        .map_err(|e| e.to_api_error("Server Error"))?;

    Ok(Json(LoginResponse { nome }))
}
