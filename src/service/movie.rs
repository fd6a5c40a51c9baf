use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::{movie::MovieRepository, showing::ShowingRepository},
    error::{booking::BookingError, Error},
    model::movie::{MovieDetailDto, MovieDto},
};

/// Service for browsing the movie catalog.
pub struct MovieService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MovieService<'a> {
    /// Creates a new instance of [`MovieService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies in the catalog.
    pub async fn list_movies(&self) -> Result<Vec<MovieDto>, Error> {
        let movies = MovieRepository::new(self.db).list().await?;

        Ok(movies.into_iter().map(Into::into).collect())
    }

    /// A movie and its upcoming showings, earliest first.
    ///
    /// Showings that have already started are not listed.
    pub async fn get_movie(&self, movie_id: i32) -> Result<MovieDetailDto, Error> {
        let Some(movie) = MovieRepository::new(self.db).get_by_id(movie_id).await? else {
            return Err(BookingError::MovieNotFound(movie_id).into());
        };

        let showings = ShowingRepository::new(self.db)
            .get_upcoming_for_movie(movie_id, Utc::now().naive_utc())
            .await?;

        Ok(MovieDetailDto {
            id: movie.id,
            title: movie.title,
            description: movie.description,
            duration_minutes: movie.duration_minutes,
            showings: showings.into_iter().map(Into::into).collect(),
        })
    }
}
