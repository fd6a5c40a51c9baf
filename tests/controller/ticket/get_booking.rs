use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use boxoffice::{
    controller::ticket::get_booking,
    model::{app::AppState, session::user::SessionUserId},
};
use boxoffice_test_utils::prelude::*;
use chrono::{Duration, Utc};

#[tokio::test]
/// Expect 200 success with the booking confirmation details
async fn returns_success_for_existing_showing() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;
    let state: AppState = test.state();

    let user = fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;
    let movie = fixtures::insert_movie(&test.state.db, "Static Over Brightvale").await?;
    let tomorrow = Utc::now().naive_utc() + Duration::days(1);
    let showing = fixtures::insert_showing(&test.state.db, movie.id, tomorrow, 100).await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = get_booking(State(state), test.session.clone(), Path(showing.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 not found for a showing that does not exist
async fn returns_not_found_for_unknown_showing() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;
    let state: AppState = test.state();

    let user = fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let non_existant_showing_id = 1;
    let result = get_booking(
        State(state),
        test.session.clone(),
        Path(non_existant_showing_id),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when no user is in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;
    let state: AppState = test.state();

    let showing_id = 1;
    let result = get_booking(State(state), test.session.clone(), Path(showing_id)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
