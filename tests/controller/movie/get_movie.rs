use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use boxoffice::{controller::movie::get_movie, model::app::AppState};
use boxoffice_test_utils::prelude::*;
use chrono::{Duration, Utc};

#[tokio::test]
/// Expect 200 success with upcoming showings for an existing movie
async fn returns_success_for_existing_movie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Movie, entity::prelude::Showing)?;
    let state: AppState = test.state();

    let movie = fixtures::insert_movie(&test.state.db, "A Theory of Evenings").await?;
    let tomorrow = Utc::now().naive_utc() + Duration::days(1);
    fixtures::insert_showing(&test.state.db, movie.id, tomorrow, 100).await?;

    let result = get_movie(State(state), Path(movie.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a movie that does not exist
async fn returns_not_found_for_unknown_movie() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Movie, entity::prelude::Showing)?;
    let state: AppState = test.state();

    let non_existant_movie_id = 1;
    let result = get_movie(State(state), Path(non_existant_movie_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
