use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        movie::{MovieDetailDto, MovieDto},
    },
    service::movie::MovieService,
};

pub static MOVIE_TAG: &str = "movie";

/// List all movies in the catalog
///
/// # Responses
/// - 200 (OK): Every movie currently in the catalog
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/movies",
    tag = MOVIE_TAG,
    responses(
        (status = 200, description = "Movie catalog", body = Vec<MovieDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let movies = MovieService::new(&state.db).list_movies().await?;

    Ok(Json(movies))
}

/// Get a movie and its upcoming showings
///
/// Showings that already started are excluded; the rest are ordered by start
/// time ascending.
///
/// # Responses
/// - 200 (OK): The movie with its upcoming showings
/// - 404 (Not Found): Unknown movie ID
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/movies/{movie_id}",
    tag = MOVIE_TAG,
    params(
        ("movie_id" = i32, Path, description = "ID of the movie")
    ),
    responses(
        (status = 200, description = "Movie with upcoming showings", body = MovieDetailDto),
        (status = 404, description = "Movie not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(movie_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let movie = MovieService::new(&state.db).get_movie(movie_id).await?;

    Ok(Json(movie))
}
