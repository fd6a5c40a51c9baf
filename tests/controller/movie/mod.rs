//! Tests for movie catalog controller endpoints.

mod get_movie;
mod list_movies;
