use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait};

use crate::{constant::TEST_SHOWING_PRICE, error::TestError};

/// Insert a movie with placeholder metadata.
pub async fn insert_movie<C: ConnectionTrait>(
    db: &C,
    title: &str,
) -> Result<entity::movie::Model, TestError> {
    let movie = entity::movie::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        description: ActiveValue::Set(Some(format!("Description for {}", title))),
        duration_minutes: ActiveValue::Set(120),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(movie.insert(db).await?)
}

/// Insert a showing for a movie with the given start time and seat count.
pub async fn insert_showing<C: ConnectionTrait>(
    db: &C,
    movie_id: i32,
    starts_at: NaiveDateTime,
    available_seats: i32,
) -> Result<entity::showing::Model, TestError> {
    let showing = entity::showing::ActiveModel {
        movie_id: ActiveValue::Set(movie_id),
        starts_at: ActiveValue::Set(starts_at),
        auditorium: ActiveValue::Set("Screen 1".to_string()),
        available_seats: ActiveValue::Set(available_seats),
        price: ActiveValue::Set(TEST_SHOWING_PRICE),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    Ok(showing.insert(db).await?)
}

/// Insert a confirmed ticket linking a user to a showing.
pub async fn insert_ticket<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    showing_id: i32,
) -> Result<entity::ticket::Model, TestError> {
    let ticket = entity::ticket::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        showing_id: ActiveValue::Set(showing_id),
        purchased_at: ActiveValue::Set(Utc::now().naive_utc()),
        status: ActiveValue::Set("confirmed".to_string()),
        ..Default::default()
    };

    Ok(ticket.insert(db).await?)
}
