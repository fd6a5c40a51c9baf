use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use boxoffice::{
    controller::auth::{register, RegisterPayload},
    model::app::AppState,
};
use boxoffice_test_utils::prelude::*;

fn payload(username: &str, email: &str) -> Json<RegisterPayload> {
    Json(RegisterPayload {
        username: username.to_string(),
        email: email.to_string(),
        password: TEST_PASSWORD.to_string(),
    })
}

#[tokio::test]
/// Expect 201 created for a new account
async fn returns_created_for_new_account() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();

    let result = register(State(state), payload("filmfan", "filmfan@example.com")).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the username is already registered
async fn returns_conflict_for_duplicate_username() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();
    fixtures::insert_user(&test.state.db, "filmfan", "first@example.com").await?;

    let result = register(State(state), payload("filmfan", "second@example.com")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 409 conflict when the email is already registered
async fn returns_conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::User)?;
    let state: AppState = test.state();
    fixtures::insert_user(&test.state.db, "firstfan", "shared@example.com").await?;

    let result = register(State(state), payload("secondfan", "shared@example.com")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.state();

    let result = register(State(state), payload("filmfan", "filmfan@example.com")).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
