use axum::{extract::State, http::StatusCode, response::IntoResponse};
use boxoffice::{
    controller::auth::get_user,
    model::{app::AppState, session::user::SessionUserId},
};
use boxoffice_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success with user information for a logged in user
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();
    let user = fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_user(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when no user is in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let result = get_user(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found and a cleared session when the session user was deleted
async fn returns_not_found_and_clears_session_for_deleted_user() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let deleted_user_id = 42;
    SessionUserId::insert(&test.session, deleted_user_id)
        .await
        .unwrap();

    let result = get_user(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let maybe_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(maybe_user_id.is_none());

    Ok(())
}
