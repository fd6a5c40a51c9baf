use axum::{extract::State, http::StatusCode, response::IntoResponse};
use boxoffice::{controller::movie::list_movies, model::app::AppState};
use boxoffice_test_utils::prelude::*;

#[tokio::test]
/// Expect 200 success with the movie catalog
async fn returns_success_with_catalog() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Movie)?;
    let state: AppState = test.state();
    fixtures::insert_movie(&test.state.db, "The Long Intermission").await?;
    fixtures::insert_movie(&test.state.db, "Static Over Brightvale").await?;

    let result = list_movies(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success with an empty catalog
async fn returns_success_for_empty_catalog() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Movie)?;
    let state: AppState = test.state();

    let result = list_movies(State(state)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 500 internal server error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;
    let state: AppState = test.state();

    let result = list_movies(State(state)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
