use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use boxoffice::{
    controller::auth::{login, LoginPayload},
    model::{app::AppState, session::user::SessionUserId},
};
use boxoffice_test_utils::prelude::*;

fn payload(username: &str, password: &str) -> Json<LoginPayload> {
    Json(LoginPayload {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
/// Expect 200 success and user ID stored in session for valid credentials
async fn returns_success_and_stores_user_in_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();
    let user = fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;

    let result = login(
        State(state),
        test.session.clone(),
        payload("filmfan", TEST_PASSWORD),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert_eq!(session_user_id, Some(user.id));

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a wrong password
async fn returns_unauthorized_for_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();
    fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;

    let result = login(
        State(state),
        test.session.clone(),
        payload("filmfan", "not the password"),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Session must remain empty after a failed login
    let session_user_id = SessionUserId::get(&test.session).await.unwrap();
    assert!(session_user_id.is_none());

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized for a username that does not exist
async fn returns_unauthorized_for_unknown_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let result = login(
        State(state),
        test.session.clone(),
        payload("nobody", TEST_PASSWORD),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
