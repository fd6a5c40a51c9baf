//! HTTP controller endpoints for the Boxoffice web API.
//!
//! This module contains Axum handlers for authentication, the movie catalog,
//! and ticket booking. Controllers handle HTTP requests, resolve the caller's
//! identity from the session, interact with services, and return appropriate
//! HTTP responses. They integrate with tower-sessions for session management
//! and use utoipa for OpenAPI documentation.

pub mod auth;
pub mod movie;
pub mod ticket;

use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{app::AppState, session::user::SessionUserId, user::UserDto},
};

/// Retrieves user information from session and then from database
///
/// # Arguments
/// - `state`: Application state with database connection
/// - `session`: The user's session
///
/// # Returns
/// - `Ok(UserDto)`: User found, containing user ID, username, and email
/// - `Err(Error::AuthError(AuthError::UserNotInSession))`: User ID not present in session
/// - `Err(Error::AuthError(AuthError::UserNotInDatabase))`: User ID exists in session but not found in database (session is cleared)
/// - `Err(Error)`: Internal errors (database query failures, session errors, etc.)
pub async fn get_user_from_session(state: &AppState, session: &Session) -> Result<UserDto, Error> {
    // Get user from session
    let Some(user_id) = SessionUserId::get(session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    // Get user from database
    let Some(user) = UserRepository::new(&state.db).get_by_id(user_id).await? else {
        session.clear().await;

        tracing::debug!(
            "Session cleared for user ID {} with active session but was not found in database",
            user_id
        );

        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user.into())
}
