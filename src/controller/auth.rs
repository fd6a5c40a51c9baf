use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    controller::get_user_from_session,
    error::Error,
    model::{api::ErrorDto, app::AppState, session::user::SessionUserId, user::UserDto},
    service::auth::{login::login_service, register::register_service},
};

pub static AUTH_TAG: &str = "auth";

#[derive(Deserialize, utoipa::ToSchema)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct LoginPayload {
    pub username: String,
    pub password: String,
}

/// Register a new user account
///
/// Creates the user but does not log them in; call the login route afterwards.
///
/// # Responses
/// - 201 (Created): Account created, returns the new user's details
/// - 409 (Conflict): Username or email already registered
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 409, description = "Username or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = register_service(
        &state.db,
        &payload.username,
        &payload.email,
        &payload.password,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Log in with username and password
///
/// Verifies the credentials and stores the user's ID in the session.
///
/// # Responses
/// - 200 (OK): Logged in, returns the user's details
/// - 401 (Unauthorized): Invalid username or password
/// - 500 (Internal Server Error): A database or session-related error occurred
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse, Error> {
    let user = login_service(&state.db, &payload.username, &payload.password).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok(Json(user))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 307 (Temporary Redirect): Successfully logged out, redirect to the movie listing
/// - 500 (Internal Server Error): There was an issue clearing the session
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Logged out, redirect to the movie listing"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids a 500 internal error response that occurs when trying
    // to clear sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::temporary("/api/movies"))
}

/// Get the currently logged in user
///
/// # Responses
/// - 200 (OK): The caller's user details
/// - 401 (Unauthorized): No user in session
/// - 404 (Not Found): Session user no longer exists; session is cleared
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok(Json(user))
}
