use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MovieDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
}

impl From<entity::movie::Model> for MovieDto {
    fn from(movie: entity::movie::Model) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            duration_minutes: movie.duration_minutes,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShowingDto {
    pub id: i32,
    pub movie_id: i32,
    pub starts_at: NaiveDateTime,
    pub auditorium: String,
    pub available_seats: i32,
    pub price: f64,
}

impl From<entity::showing::Model> for ShowingDto {
    fn from(showing: entity::showing::Model) -> Self {
        Self {
            id: showing.id,
            movie_id: showing.movie_id,
            starts_at: showing.starts_at,
            auditorium: showing.auditorium,
            available_seats: showing.available_seats,
            price: showing.price,
        }
    }
}

/// A movie together with its upcoming showings, ordered by start time.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MovieDetailDto {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub showings: Vec<ShowingDto>,
}
