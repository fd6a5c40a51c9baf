use axum::{extract::State, http::StatusCode, response::IntoResponse};
use boxoffice::{
    controller::ticket::my_tickets,
    model::{app::AppState, session::user::SessionUserId},
};
use boxoffice_test_utils::prelude::*;
use chrono::{Duration, Utc};

#[tokio::test]
/// Expect 200 success with the caller's tickets
async fn returns_success_for_logged_in_user() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;
    let state: AppState = test.state();

    let user = fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;
    let movie = fixtures::insert_movie(&test.state.db, "A Theory of Evenings").await?;
    let tomorrow = Utc::now().naive_utc() + Duration::days(1);
    let showing = fixtures::insert_showing(&test.state.db, movie.id, tomorrow, 100).await?;
    fixtures::insert_ticket(&test.state.db, user.id, showing.id).await?;

    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = my_tickets(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 200 success for a user without any bookings
async fn returns_success_without_bookings() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;
    let state: AppState = test.state();

    let user = fixtures::insert_user(&test.state.db, "filmfan", "filmfan@example.com").await?;
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = my_tickets(State(state), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 unauthorized when no user is in session
async fn returns_unauthorized_without_session() -> Result<(), TestError> {
    let test = test_setup_with_booking_tables!()?;
    let state: AppState = test.state();

    let result = my_tickets(State(state), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
