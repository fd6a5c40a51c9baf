use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::movie::{MovieDto, ShowingDto};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TicketDto {
    pub id: i32,
    pub movie_title: String,
    pub starts_at: NaiveDateTime,
    pub auditorium: String,
    pub price: f64,
    pub purchased_at: NaiveDateTime,
    pub status: String,
}

/// What a user sees on the booking confirmation step before committing to a
/// seat.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookingPreviewDto {
    pub movie: MovieDto,
    pub showing: ShowingDto,
}
